use std::fmt::{self, Display, Formatter};

use keyed_collections::algorithms::search::{binary_search_by_key, find_most, linear_search};
use keyed_collections::algorithms::sort::{merge_sort, quicksort};
use keyed_collections::collections::contiguous::DynamicArray;
use keyed_collections::collections::linked::DoublyLinkedList;
use keyed_collections::collections::traits::{Container, Export};
use keyed_collections::record::{Record, UnknownField, Value, field_key};
use keyed_collections::record_fields;

#[derive(Debug, Clone)]
struct Customer {
    id: &'static str,
    name: &'static str,
    age: u32,
    gender: &'static str,
    rides_taken: Vec<&'static str>,
}

impl Customer {
    fn ride_count(&self) -> usize {
        self.rides_taken.len()
    }
}

record_fields! {
    enum CustomerField for Customer {
        Id => "customer_id",
        Name => "name",
        Age => "age",
        Gender => "gender",
        RideCount => "ride_count",
    }
}

impl Record for Customer {
    type Field = CustomerField;

    fn field(&self, field: CustomerField) -> Value {
        match field {
            CustomerField::Id => self.id.into(),
            CustomerField::Name => self.name.into(),
            CustomerField::Age => self.age.into(),
            CustomerField::Gender => self.gender.into(),
            CustomerField::RideCount => Value::Int(self.rides_taken.len() as i64),
        }
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer {}: {}, {}, {}, Rides: {}",
            self.id,
            self.name,
            self.age,
            self.gender,
            self.ride_count()
        )
    }
}

#[derive(Debug, Clone)]
struct Restaurant {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    menu: Vec<(&'static str, f64)>,
}

impl Restaurant {
    fn average_price(&self) -> f64 {
        if self.menu.is_empty() {
            return 0.0;
        }
        self.menu.iter().map(|(_, price)| price).sum::<f64>() / self.menu.len() as f64
    }
}

record_fields! {
    enum RestaurantField for Restaurant {
        Id => "restaurant_id",
        Name => "name",
        Location => "location",
        AveragePrice => "average_price",
    }
}

impl Record for Restaurant {
    type Field = RestaurantField;

    fn field(&self, field: RestaurantField) -> Value {
        match field {
            RestaurantField::Id => self.id.into(),
            RestaurantField::Name => self.name.into(),
            RestaurantField::Location => self.location.into(),
            RestaurantField::AveragePrice => self.average_price().into(),
        }
    }
}

impl Display for Restaurant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Restaurant {}: {}, {}, Avg Price: ${:.2}",
            self.id,
            self.name,
            self.location,
            self.average_price()
        )
    }
}

fn sample_customers() -> [Customer; 4] {
    [
        Customer {
            id: "1",
            name: "John Doe",
            age: 25,
            gender: "Male",
            rides_taken: vec!["ride1", "ride2"],
        },
        Customer {
            id: "2",
            name: "Jane Smith",
            age: 30,
            gender: "Female",
            rides_taken: vec!["ride1", "ride2", "ride3", "ride4"],
        },
        Customer {
            id: "3",
            name: "Bob Johnson",
            age: 45,
            gender: "Male",
            rides_taken: vec!["ride1"],
        },
        Customer {
            id: "4",
            name: "Alice Brown",
            age: 22,
            gender: "Female",
            rides_taken: vec!["ride2", "ride3"],
        },
    ]
}

fn sample_restaurants() -> [Restaurant; 5] {
    [
        Restaurant {
            id: "R1",
            name: "Burger Palace",
            location: "North Wing",
            menu: vec![("Cheeseburger", 8.99), ("Fries", 3.99), ("Soda", 2.49)],
        },
        Restaurant {
            id: "R2",
            name: "Pizza Place",
            location: "North Wing",
            menu: vec![("Pepperoni Pizza", 12.99), ("Cheese Pizza", 10.99), ("Garlic Bread", 4.99)],
        },
        Restaurant {
            id: "R3",
            name: "Ice Cream Shop",
            location: "South Wing",
            menu: vec![("Vanilla Cone", 3.49), ("Chocolate Sundae", 5.99), ("Banana Split", 7.99)],
        },
        Restaurant {
            id: "R4",
            name: "Taco Stand",
            location: "East Wing",
            menu: vec![("Beef Taco", 4.99), ("Chicken Burrito", 9.99), ("Nachos", 7.49)],
        },
        Restaurant {
            id: "R5",
            name: "Noodle House",
            location: "South Wing",
            menu: vec![("Ramen", 11.99), ("Pad Thai", 13.49), ("Fried Rice", 10.99)],
        },
    ]
}

fn print_all<T: Display>(items: impl IntoIterator<Item = T>) {
    for item in items {
        println!("{item}");
    }
}

fn main() -> Result<(), UnknownField> {
    println!("===== CUSTOMER SECTION =====");
    println!("Attributes: {:?}", CustomerField::ALL);

    let mut customer_list = DoublyLinkedList::new();
    for customer in sample_customers() {
        customer_list.append(customer);
    }

    let customer_array: DynamicArray<Customer> = customer_list.iter().cloned().collect();

    let by_rides = merge_sort(&customer_array, Customer::ride_count);
    if let Some(most) = find_most(&customer_array, Customer::ride_count) {
        println!("\nCustomer with most rides: {most}");

        let position = binary_search_by_key(by_rides, &most.ride_count(), Customer::ride_count);
        println!("Position when sorted by rides: {position:?}");
    }

    // Attribute names are checked once, here, rather than on every comparison.
    for attribute in ["age", "gender", "name"] {
        let field: CustomerField = attribute.parse()?;
        println!("\nCustomers sorted by {field}:");
        print_all(quicksort(&customer_list, field_key::<Customer>(field)));
    }

    println!("\n===== RESTAURANT SECTION =====");
    println!("Attributes: {:?}", RestaurantField::ALL);

    let restaurant_array: DynamicArray<Restaurant> = sample_restaurants().into_iter().collect();
    println!("\nAll restaurants in the food court:");
    print_all(restaurant_array.export_all());

    let location = "North Wing";
    println!("\nRestaurants in {location}:");
    let matching = linear_search(&restaurant_array, &location, |restaurant| restaurant.location);
    if matching.is_empty() {
        println!("No restaurants found in {location}");
    } else {
        print_all(matching);
    }

    if let Some(found) = restaurant_array.get_by_attribute("name", &Value::from("Taco Stand"))? {
        println!("\nLooked up by name: {found}");
    }

    println!("\nRestaurants sorted by average meal price:");
    print_all(merge_sort(
        &restaurant_array,
        field_key::<Restaurant>(RestaurantField::AveragePrice),
    ));

    Ok(())
}
