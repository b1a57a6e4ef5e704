use chrono::NaiveDate;

use diet_tracker_rs::error::DietError;
use diet_tracker_rs::models::{Food, FoodIntake, FoodIntakeList, UniqueFoodList};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_intake_list_starts_empty() {
    let list = FoodIntakeList::new(date("2019-05-06"));
    assert!(list.entries().is_empty());
}

#[test]
fn test_intake_list_delete_out_of_range() {
    let mut list = FoodIntakeList::new(date("2019-05-06"));
    assert!(matches!(
        list.delete(0),
        Err(DietError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        list.delete(100),
        Err(DietError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_intake_list_append_then_delete_returns_to_empty() {
    let mut list = FoodIntakeList::new(date("2019-05-06"));
    list.add(FoodIntake::new(
        date("2019-05-06"),
        Food::new("shrooms", 1.0, 1.0, 1.0).unwrap(),
    ));
    assert_eq!(list.len(), 1);

    list.delete(0).unwrap();
    assert!(list.entries().is_empty());
}

#[test]
fn test_catalog_starts_empty() {
    let list = UniqueFoodList::new();
    assert!(list.entries().is_empty());
}

#[test]
fn test_catalog_membership_follows_add_and_delete() {
    let mut list = UniqueFoodList::new();
    let noodles = Food::new("noodles", 1.0, 1.0, 1.0).unwrap();
    let chocolate = Food::new("chocolate", 2.0, 2.0, 2.0).unwrap();

    assert!(!list.contains(&noodles));
    assert!(!list.contains(&chocolate));

    list.add(noodles.clone()).unwrap();
    list.add(chocolate.clone()).unwrap();

    assert!(list.contains(&noodles));
    assert!(list.contains(&chocolate));

    list.delete(0).unwrap();
    list.delete(0).unwrap();

    assert!(!list.contains(&noodles));
    assert!(!list.contains(&chocolate));
}

#[test]
fn test_catalog_position_of_absent_name() {
    let list = UniqueFoodList::new();
    assert_eq!(list.position("strawberry"), None);
}

#[test]
fn test_catalog_position_of_present_names() {
    let mut list = UniqueFoodList::new();
    list.add(Food::new("noodles", 1.0, 1.0, 1.0).unwrap())
        .unwrap();
    list.add(Food::new("chocolate", 2.0, 2.0, 2.0).unwrap())
        .unwrap();

    assert_eq!(list.position("noodles"), Some(0));
    assert_eq!(list.position("chocolate"), Some(1));
}

#[test]
fn test_catalog_delete_out_of_range() {
    let mut list = UniqueFoodList::new();
    assert!(matches!(
        list.delete(0),
        Err(DietError::IndexOutOfRange { .. })
    ));
}
