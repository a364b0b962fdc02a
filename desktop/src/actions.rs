use std::{io::Write, path::Path};

use ardubmp_core::ConversionError;
use log::error;

use crate::{
    clipboard::{Clipboard, copy_literal},
    sink::{print_literal, save_literal},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Print,
    Save,
    Copy,
}

impl Action {
    pub fn repr(self) -> &'static str {
        match self {
            Action::Print => "Print",
            Action::Save => "Save",
            Action::Copy => "Copy",
        }
    }
}

/// Which outputs the rendered literal goes to.
#[derive(Debug, Default, Clone, Copy)]
pub struct Delivery<'a> {
    pub print: bool,
    pub save_to: Option<&'a Path>,
    pub copy: bool,
}

/// Runs every requested action once, in order. A failing action never
/// keeps the following ones from running; all failures are returned.
pub fn deliver(
    literal: &str,
    delivery: &Delivery<'_>,
    out: &mut impl Write,
    clipboard: &mut impl Clipboard,
) -> Vec<(Action, ConversionError)> {
    let mut failures = Vec::new();
    let mut attempt = |action: Action, result: Result<(), ConversionError>| {
        if let Err(e) = result {
            error!("{} failed: {}", action.repr(), e);
            failures.push((action, e));
        }
    };

    if delivery.print {
        attempt(Action::Print, print_literal(out, literal));
    }
    if let Some(path) = delivery.save_to {
        attempt(Action::Save, save_literal(path, literal).map(|_| ()));
    }
    if delivery.copy {
        attempt(Action::Copy, copy_literal(clipboard, literal));
    }
    failures
}
