//! The fixed menu catalog

use crate::types::MenuItem;

/// Every item on the menu, in display order
pub const PIZZA_DATA: &[MenuItem] = &[
    MenuItem {
        name: "Focaccia",
        ingredients: "Bread with italian olive oil and rosemary",
        price: 6,
        photo_name: "pizzas/focaccia.jpg",
        sold_out: false,
    },
    MenuItem {
        name: "Pizza Margherita",
        ingredients: "Tomato and mozarella",
        price: 10,
        photo_name: "pizzas/margherita.jpg",
        sold_out: false,
    },
    MenuItem {
        name: "Pizza Spinaci",
        ingredients: "Tomato, mozarella, spinach, and ricotta cheese",
        price: 12,
        photo_name: "pizzas/spinaci.jpg",
        sold_out: false,
    },
    MenuItem {
        name: "Pizza Funghi",
        ingredients: "Tomato, mozarella, mushrooms, and onion",
        price: 12,
        photo_name: "pizzas/funghi.jpg",
        sold_out: false,
    },
    MenuItem {
        name: "Pizza Salamino",
        ingredients: "Tomato, mozarella, and pepperoni",
        price: 15,
        photo_name: "pizzas/salamino.jpg",
        sold_out: true,
    },
    MenuItem {
        name: "Pizza Prosciutto",
        ingredients: "Tomato, mozarella, ham, aragula, and burrata cheese",
        price: 18,
        photo_name: "pizzas/prosciutto.jpg",
        sold_out: false,
    },
];

/// Look up a catalog entry by its display name
pub fn find(name: &str) -> Option<&'static MenuItem> {
    PIZZA_DATA.iter().find(|item| item.name == name)
}
