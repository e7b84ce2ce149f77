//! Attribute stack tests through the public API

use ansilog::render::{AttributeElement, AttributeStack, Category, Event, Fragment};

fn markup(fragments: &[Fragment]) -> Vec<&str> {
    fragments.iter().filter_map(Fragment::markup).collect()
}

#[test]
fn green_bold_underline_then_green_off() {
    let mut stack = AttributeStack::default();
    stack.apply(Event::Set(AttributeElement::foreground("green")));
    stack.apply(Event::Set(AttributeElement::bold()));
    stack.apply(Event::Set(AttributeElement::underline()));

    let out = stack.apply(Event::Reset(Category::Foreground));
    assert_eq!(
        markup(&out),
        vec!["</u>", "</b>", "</span>", "<b>", "<u>"]
    );
    assert!(matches!(out[0], Fragment::Close(_)));
    assert!(matches!(out[3], Fragment::Open(_)));
}

#[test]
fn reset_all_on_empty_stack_emits_only_invisible() {
    let mut stack = AttributeStack::default();
    let out = stack.apply(Event::ResetAll);
    assert_eq!(out, vec![Fragment::Invisible]);
    assert!(markup(&out).is_empty());
}

#[test]
fn reset_of_top_element_reopens_nothing() {
    let mut stack = AttributeStack::default();
    stack.apply(Event::Set(AttributeElement::italic()));
    stack.apply(Event::Set(AttributeElement::bold()));
    let out = stack.apply(Event::Reset(Category::Bold));
    assert_eq!(markup(&out), vec!["</b>"]);
    assert_eq!(stack.open_elements(), &[AttributeElement::italic()]);
}

#[test]
fn pending_closes_always_mirror_open_order() {
    let mut stack = AttributeStack::default();
    let events = [
        Event::Set(AttributeElement::bold()),
        Event::Set(AttributeElement::background("red")),
        Event::Set(AttributeElement::italic()),
        Event::Reset(Category::Bold),
        Event::Set(AttributeElement::background("blue")),
        Event::Set(AttributeElement::overline()),
        Event::Reset(Category::Italic),
    ];
    let mut open: Vec<String> = Vec::new();
    for event in events {
        for fragment in stack.apply(event) {
            match fragment {
                Fragment::Open(m) => open.push(m),
                Fragment::Close(m) => {
                    let top = open.pop().expect("close without open");
                    let name = top[1..].split(|c| c == ' ' || c == '>').next().unwrap();
                    assert_eq!(m, format!("</{}>", name));
                }
                _ => {}
            }
        }
        let expected: Vec<&str> = stack
            .open_elements()
            .iter()
            .map(AttributeElement::open_markup)
            .collect();
        assert_eq!(open, expected);
    }
}
