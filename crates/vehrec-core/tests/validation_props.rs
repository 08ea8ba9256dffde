use proptest::prelude::*;
use vehrec_core::{validate_query, Field, VehicleQuery, VehicleQueryPayload};

fn text(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>(), min..=max).prop_map(|cs| cs.into_iter().collect())
}

fn valid_query() -> impl Strategy<Value = VehicleQuery> {
    (
        text(1, 20),
        text(1, 10),
        text(1, 15),
        "[0-9]{1,8}",
        "[0-9]{4}",
    )
        .prop_map(|(company, fuel, transmission, price, year)| {
            VehicleQuery::new(company, fuel, transmission, price, year)
        })
}

fn invalid_value(field: Field) -> BoxedStrategy<String> {
    match field {
        Field::Company => prop_oneof![Just(String::new()), text(21, 40)].boxed(),
        Field::Fuel => prop_oneof![Just(String::new()), text(11, 30)].boxed(),
        Field::Transmission => prop_oneof![Just(String::new()), text(16, 30)].boxed(),
        Field::Price => prop_oneof![
            Just(String::new()),
            "[0-9]{9,12}",
            "[0-9]{0,4}[a-z.,$ -][0-9]{0,3}",
        ]
        .boxed(),
        Field::Year => prop_oneof![
            Just(String::new()),
            "[0-9]{1,3}",
            "[0-9]{5,8}",
            "[0-9]{0,2}[a-z][0-9]{0,1}",
        ]
        .boxed(),
    }
}

fn invalid_values() -> impl Strategy<Value = Vec<String>> {
    Field::ALL
        .into_iter()
        .map(invalid_value)
        .collect::<Vec<_>>()
}

proptest! {
    #[test]
    fn prop_valid_records_are_returned_unchanged(query in valid_query()) {
        prop_assert_eq!(validate_query(&query), Ok(query.clone()));
    }

    #[test]
    fn prop_valid_records_always_build_a_payload(query in valid_query()) {
        let payload = VehicleQueryPayload::from_query(&query).unwrap();
        prop_assert_eq!(payload.price, query.price.parse::<u32>().unwrap());
        prop_assert_eq!(payload.year, query.year.parse::<u16>().unwrap());
    }

    #[test]
    fn prop_failures_name_exactly_the_violating_fields(
        base in valid_query(),
        mask in proptest::collection::vec(any::<bool>(), 5),
        bad in invalid_values(),
    ) {
        prop_assume!(mask.iter().any(|b| *b));

        let mut query = base;
        let mut broken = Vec::new();
        for ((field, flip), value) in Field::ALL.into_iter().zip(mask).zip(bad) {
            if flip {
                query.set(field, value);
                broken.push(field);
            }
        }

        let errors = validate_query(&query).unwrap_err();
        prop_assert_eq!(errors.fields().collect::<Vec<_>>(), broken);
    }
}
