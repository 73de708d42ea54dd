//! Menu views
//!
//! Each view is a literal rendering of fixed content. None of them read the
//! catalog.

use crate::dom::{Element, Node, Tag};
use chrono::{Local, NaiveTime};

/// Single menu entry, always the spinaci pizza
pub fn pizza() -> Node {
    Element::new(Tag::Div)
        .child(
            Element::new(Tag::Img)
                .attr("src", "pizzas/spinaci.jpg")
                .attr("alt", "Pizza Spinaci"),
        )
        .child(Element::new(Tag::H2).text("Pizza Spinaci"))
        .into()
}

/// Menu section with a heading and two entries
pub fn menu() -> Node {
    Element::new(Tag::Div)
        .child(Element::new(Tag::H2).text("Our Menu"))
        .child(pizza())
        .child(pizza())
        .into()
}

/// Builds the welcome heading but hands nothing back
pub fn header() -> Option<Node> {
    let _welcome = Element::new(Tag::H2).text("Welcome to React Pizza Store");
    None
}

/// Opening notice stamped with the local time of this render
pub fn footer() -> Node {
    footer_at(Local::now().time())
}

pub fn footer_at(time: NaiveTime) -> Node {
    Element::new(Tag::Div)
        .text("We are open now ")
        .text(format_local_time(time))
        .into()
}

/// 12-hour clock with seconds, e.g. `1:05:09 PM`
pub fn format_local_time(time: NaiveTime) -> String {
    time.format("%-I:%M:%S %p").to_string()
}

/// Top-level view
pub fn app() -> Node {
    Element::new(Tag::Div)
        .child(Element::new(Tag::H1).text("Hello React!!!"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn root_element(node: &Node) -> &Element {
        node.as_element().expect("view should render an element")
    }

    #[test]
    fn pizza_always_renders_spinaci() {
        let spinaci = catalog::find("Pizza Spinaci").unwrap();
        let node = pizza();
        let div = root_element(&node);

        let img = div.children_with_tag(Tag::Img).next().unwrap();
        assert_eq!(img.attribute("src"), Some(spinaci.photo_name));
        assert_eq!(img.attribute("alt"), Some(spinaci.name));
        assert_eq!(node.text_content(), spinaci.name);
        assert_eq!(pizza(), node);
    }

    #[test]
    fn menu_renders_two_pizzas_regardless_of_catalog() {
        assert_eq!(catalog::PIZZA_DATA.len(), 6);

        let node = menu();
        let div = root_element(&node);
        let headings: Vec<String> = div
            .children_with_tag(Tag::H2)
            .map(Element::text_content)
            .collect();
        assert_eq!(headings, ["Our Menu"]);

        let items: Vec<&Element> = div.children_with_tag(Tag::Div).collect();
        assert_eq!(items.len(), 2);
        for item in items {
            assert_eq!(Node::Element(item.clone()), pizza());
        }
    }

    #[test]
    fn header_returns_nothing() {
        assert!(header().is_none());
    }

    #[test]
    fn footer_embeds_given_time() {
        let time = NaiveTime::from_hms_opt(13, 5, 9).unwrap();
        assert_eq!(footer_at(time).text_content(), "We are open now 1:05:09 PM");

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_local_time(midnight), "12:00:00 AM");
    }

    #[test]
    fn footer_uses_current_local_time() {
        let before = Local::now().time();
        let text = footer().text_content();
        let after = Local::now().time();

        let stamp = text.strip_prefix("We are open now ").unwrap();
        // A render straddling a second boundary may show either side
        assert!(stamp == format_local_time(before) || stamp == format_local_time(after));
    }

    #[test]
    fn app_renders_only_the_title() {
        let node = app();
        assert_eq!(node.to_string(), "<div><h1>Hello React!!!</h1></div>");
        assert_eq!(node.text_content(), "Hello React!!!");

        let text = node.text_content();
        assert!(!text.contains("Our Menu"));
        assert!(!text.contains("We are open now"));
        assert!(!text.contains("Welcome"));
    }
}
