//! Property-based laws for the accessors

use crate::common::*;
use modelkit::{collection, model};
use proptest::prelude::*;
use proptest::sample::Index;

proptest! {
    #[test]
    fn get_finds_exactly_the_present_identities(models in people_strategy(), wanted in 0i64..8) {
        let found = model::get(&models, &id(wanted), "id");
        prop_assert_eq!(found.is_some(), ids(&models).contains(&wanted));
        if let Some(found) = found {
            let expected = id(wanted);
            prop_assert_eq!(found.get("id"), Some(&expected));
        }
    }

    #[test]
    fn get_index_agrees_with_get(models in people_strategy(), wanted in 0i64..8) {
        let index = model::get_index(&models, &id(wanted), "id");
        match model::get(&models, &id(wanted), "id") {
            Some(found) => prop_assert_eq!(&models[index as usize], found),
            None => prop_assert_eq!(index, model::NOT_FOUND),
        }
    }

    #[test]
    fn add_then_get_sees_the_model(models in people_strategy(), new_id in 0i64..8, at in proptest::option::of(0usize..15)) {
        let mut models = collection::dedupe(&models, "id");
        let before = models.len();
        let existed = model::has(&models, &id(new_id), "id");

        model::add(&mut models, person(new_id, "added"), at, "id");

        let found = model::get(&models, &id(new_id), "id").unwrap();
        prop_assert_eq!(found.get("name").and_then(|n| n.as_str()), Some("added"));
        prop_assert_eq!(models.len(), if existed { before } else { before + 1 });
    }

    #[test]
    fn remove_then_get_finds_nothing(models in people_strategy(), wanted in 0i64..8) {
        let mut models = collection::dedupe(&models, "id");
        let before = models.len();
        let removed = model::remove(&mut models, &id(wanted), "id");

        prop_assert!(model::get(&models, &id(wanted), "id").is_none());
        prop_assert_eq!(models.len(), before - usize::from(removed.is_some()));
    }

    #[test]
    fn move_by_index_preserves_the_multiset(models in people_strategy(), from in any::<Index>(), to in any::<Index>()) {
        prop_assume!(!models.is_empty());
        let mut moved = models.clone();
        let from = from.index(models.len());
        let to = to.index(models.len());

        model::move_by_index(&mut moved, from, to);

        prop_assert_eq!(moved.len(), models.len());
        prop_assert_eq!(multiset(&moved), multiset(&models));
        prop_assert_eq!(&moved[to], &models[from]);
    }
}
