//! Classes command: print the utility-class catalog and validate
//! individual classes.

use tuic_class::{all_classes, validate_class};

use crate::error::{Result, TuitError};

/// Arguments for the classes command.
#[derive(Debug, Clone, Default)]
pub struct ClassesArgs {
    /// Only show classes in this category.
    pub category: Option<String>,
    /// Validate a single class instead of listing.
    pub validate: Option<String>,
}

/// Run the classes command.
pub fn run_classes(args: ClassesArgs) -> Result<()> {
    if let Some(class) = &args.validate {
        let validation = validate_class(class);
        if validation.valid {
            println!("{}: valid", validation.class);
            return Ok(());
        }
        match &validation.suggestion {
            Some(suggestion) => {
                println!("{}: unknown, did you mean '{}'?", validation.class, suggestion)
            }
            None => println!("{}: unknown", validation.class),
        }
        return Err(TuitError::Input(format!("unknown class '{}'", class)));
    }

    let mut shown = 0;
    for info in all_classes() {
        if let Some(category) = &args.category {
            if info.category != category {
                continue;
            }
        }
        println!(
            "{:<28} {:<10} {}  e.g. {}",
            info.name, info.category, info.description, info.example
        );
        shown += 1;
    }
    if shown == 0 {
        return Err(TuitError::Input(format!(
            "no classes in category '{}'",
            args.category.unwrap_or_default()
        )));
    }
    Ok(())
}
