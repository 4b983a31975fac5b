// Property tests for car selection: chosen ids always come from the
// category, and the uniform chooser spreads picks evenly across positions.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use rentora::core::clock::FixedClock;
use rentora::core::random::{FixedIndexChooser, IndexChooser, UniformIndexChooser};
use rentora::fleet::{CarCategory, InMemoryCarRepository};
use rentora::rentals::RentalService;
use rentora::taxes::TaxCalculator;

fn category_with_ids(car_ids: Vec<String>) -> CarCategory {
    CarCategory {
        id: "cat-1".to_string(),
        name: "Any".to_string(),
        car_ids,
        price: Decimal::new(376, 1),
    }
}

fn service_with_chooser(chooser: Arc<dyn IndexChooser>) -> RentalService {
    RentalService::new(
        Arc::new(InMemoryCarRepository::new(vec![])),
        TaxCalculator::default(),
        chooser,
        Arc::new(FixedClock(Utc::now())),
    )
}

proptest! {
    #[test]
    fn chosen_id_is_always_a_member_of_the_sequence(
        car_ids in prop::collection::vec("[a-z0-9]{4,12}", 1..20),
        position_seed in 0usize..1000
    ) {
        let index = position_seed % car_ids.len();
        let service = service_with_chooser(Arc::new(FixedIndexChooser(index)));
        let category = category_with_ids(car_ids.clone());

        let chosen = service.choose_random_car(&category).unwrap();

        prop_assert!(car_ids.contains(&chosen));
        prop_assert_eq!(chosen, car_ids[index].clone());
    }

    #[test]
    fn random_selection_never_leaves_the_sequence(
        car_ids in prop::collection::vec("[a-z0-9]{4,12}", 1..20)
    ) {
        let service = service_with_chooser(Arc::new(UniformIndexChooser));
        let category = category_with_ids(car_ids.clone());

        let chosen = service.choose_random_car(&category).unwrap();

        prop_assert!(car_ids.contains(&chosen));
    }
}

#[test]
fn uniform_chooser_spreads_picks_roughly_evenly() {
    let chooser = UniformIndexChooser;
    let positions = 5usize;
    let trials = 10_000usize;

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..trials {
        *counts.entry(chooser.choose(positions)).or_default() += 1;
    }

    let expected = trials / positions;
    for position in 0..positions {
        let count = *counts.get(&position).unwrap_or(&0);
        // expected 2000 per position; allow a wide statistical margin
        assert!(
            count > expected / 2 && count < expected * 2,
            "position {} picked {} times, expected about {}",
            position,
            count,
            expected
        );
    }
}
