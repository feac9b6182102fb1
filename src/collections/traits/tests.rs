#![cfg(all(test, feature = "collections-all"))]

use super::*;
use crate::collections::binary_tree::{BinaryTree, SearchTree};
use crate::collections::contiguous::DynamicArray;
use crate::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use crate::record::{Record, Value};
use crate::record_fields;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Restaurant {
    id: &'static str,
    name: &'static str,
    location: &'static str,
}

record_fields! {
    enum RestaurantField for Restaurant {
        Id => "restaurant_id",
        Name => "name",
        Location => "location",
    }
}

impl Record for Restaurant {
    type Field = RestaurantField;

    fn field(&self, field: RestaurantField) -> Value {
        match field {
            RestaurantField::Id => self.id.into(),
            RestaurantField::Name => self.name.into(),
            RestaurantField::Location => self.location.into(),
        }
    }
}

fn restaurants() -> [Restaurant; 3] {
    [
        Restaurant { id: "R1", name: "Pizza Place", location: "North Wing" },
        Restaurant { id: "R2", name: "Burger Joint", location: "South Wing" },
        Restaurant { id: "R3", name: "Sushi Bar", location: "North Wing" },
    ]
}

/// Runs the same checks against every container type.
fn check_attribute_access<C>(mut container: C)
where
    C: Container<Item = Restaurant>,
{
    for restaurant in restaurants() {
        container.append(restaurant);
    }
    assert_eq!(container.size(), 3);

    let found = container.get_by_attribute("location", &Value::from("North Wing"));
    assert_eq!(found.map(|r| r.map(|r| r.id)), Ok(Some("R1")), "The first match should be found.");

    assert_eq!(
        container.get_by_field(RestaurantField::Name, &Value::from("Sushi Bar")).map(|r| r.id),
        Some("R3")
    );
    assert_eq!(container.get_by_field(RestaurantField::Name, &Value::from("sushi bar")), None);

    let error = container.get_by_attribute("cuisine", &Value::from("Thai")).unwrap_err();
    assert_eq!(error.to_string(), "Unknown field `cuisine` for record type Restaurant!");

    assert_eq!(container.remove_by_attribute("restaurant_id", &Value::from("R2")), Ok(true));
    assert_eq!(container.remove_by_attribute("restaurant_id", &Value::from("R2")), Ok(false));
    assert!(
        container.remove_by_attribute("owner", &Value::from("R1")).is_err(),
        "Unknown names are errors even when nothing would match."
    );
    assert_eq!(container.size(), 2);

    assert!(container.remove_by_field(RestaurantField::Location, &Value::from("North Wing")));
    assert_eq!(
        container.export_all().into_iter().map(|r| r.id).collect::<Vec<_>>(),
        ["R3"]
    );
    assert!(!container.is_empty());
}

#[test]
fn test_singly_linked_list() {
    check_attribute_access(SinglyLinkedList::new());
}

#[test]
fn test_doubly_linked_list() {
    check_attribute_access(DoublyLinkedList::new());
}

#[test]
fn test_dynamic_array() {
    check_attribute_access(DynamicArray::new());
}

#[test]
fn test_binary_tree() {
    check_attribute_access(BinaryTree::new());
}

#[test]
fn test_search_tree() {
    // Ordered by id first, so in-order matches the insertion order here.
    check_attribute_access(SearchTree::new());
}
