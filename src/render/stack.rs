//! The open-element stack.
//!
//! ANSI attributes switch on and off independently while HTML elements must
//! nest strictly. `AttributeStack` records the open elements outer-to-inner
//! and turns every attribute change into the close/open fragments that keep
//! the emitted markup well-formed.
//!
//! The transition is pure: `apply` updates the stack and returns the
//! fragments, and the caller hands them to an emitter afterwards. A failing
//! emitter therefore never leaves the stack out of step with the ANSI state.

use super::element::{AttributeElement, Category};

/// One attribute-change event decoded from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open an element in its category's slot, replacing any open one.
    Set(AttributeElement),
    /// Turn a single category off.
    Reset(Category),
    /// SGR 0: turn everything off.
    ResetAll,
    Conceal,
    Reveal,
    /// An encoded token copied to the output untouched.
    PassThroughOpaque(String),
}

/// Output produced by a stack transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Open(String),
    Close(String),
    /// A reset happened but there was nothing to close.
    Invisible,
    Opaque(String),
}

impl Fragment {
    /// Markup text of an open or close fragment.
    pub fn markup(&self) -> Option<&str> {
        match self {
            Fragment::Open(markup) | Fragment::Close(markup) => Some(markup),
            Fragment::Invisible | Fragment::Opaque(_) => None,
        }
    }
}

/// Ordered record of open elements plus the concealment flag.
#[derive(Debug, Clone, Default)]
pub struct AttributeStack {
    /// Open elements, outermost first
    open: Vec<AttributeElement>,
    /// Line wrapper carrying the palette's default colors
    wrapper: Option<AttributeElement>,
    /// Whether the wrapper has been opened since the last full reset
    started: bool,
    concealed: bool,
}

impl AttributeStack {
    /// Create a stack; `wrapper` is opened before anything else.
    pub fn new(wrapper: Option<AttributeElement>) -> Self {
        Self {
            wrapper,
            ..Self::default()
        }
    }

    /// Open the default wrapper unless it is already open.
    pub fn begin(&mut self) -> Vec<Fragment> {
        let mut out = Vec::new();
        self.begin_into(&mut out);
        out
    }

    fn begin_into(&mut self, out: &mut Vec<Fragment>) {
        if self.started {
            return;
        }
        self.started = true;
        if let Some(wrapper) = &self.wrapper {
            out.push(Fragment::Open(wrapper.open_markup().to_string()));
            self.open.insert(0, wrapper.clone());
        }
    }

    /// Apply one event, returning the fragments to emit in order.
    pub fn apply(&mut self, event: Event) -> Vec<Fragment> {
        let mut out = Vec::new();

        match event {
            Event::Set(element) => {
                if element.category() != Category::Default {
                    self.begin_into(&mut out);
                    self.reset(element.category(), &mut out);
                    out.push(Fragment::Open(element.open_markup().to_string()));
                    self.open.push(element);
                }
            }
            Event::Reset(category) => {
                if category != Category::Default {
                    self.reset(category, &mut out);
                }
            }
            Event::ResetAll => {
                // The wrapper closes too; the next begin or Set reopens it
                if self.open.is_empty() {
                    out.push(Fragment::Invisible);
                } else {
                    out.extend(self.close_open());
                }
                self.started = false;
                self.concealed = false;
            }
            Event::Conceal => self.concealed = true,
            Event::Reveal => self.concealed = false,
            Event::PassThroughOpaque(token) => {
                self.begin_into(&mut out);
                out.push(Fragment::Opaque(token));
            }
        }

        out
    }

    /// Close the slot of `category`, then reopen whatever sat above it.
    fn reset(&mut self, category: Category, out: &mut Vec<Fragment>) {
        let Some(pos) = self.open.iter().position(|el| el.category() == category) else {
            return;
        };

        let above: Vec<AttributeElement> = self.open.drain(pos..).collect();
        out.extend(
            above
                .iter()
                .rev()
                .map(|el| Fragment::Close(el.close_markup().to_string())),
        );
        for el in above.into_iter().skip(1) {
            out.push(Fragment::Open(el.open_markup().to_string()));
            self.open.push(el);
        }
    }

    /// Close every open element, the wrapper included, at end of stream.
    pub fn close_all(&mut self) -> Vec<Fragment> {
        let out = self.close_open();
        self.started = false;
        self.concealed = false;
        out
    }

    fn close_open(&mut self) -> Vec<Fragment> {
        self.open
            .drain(..)
            .rev()
            .map(|el| Fragment::Close(el.close_markup().to_string()))
            .collect()
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Open elements, outermost first.
    pub fn open_elements(&self) -> &[AttributeElement] {
        &self.open
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
