//! Class-string translation: single-class mapping, whole-string
//! translation with per-side spacing accumulation, and text style
//! combination.

use indexmap::IndexSet;

use crate::tables::{
    border_color_option, ImportKey, FLEX_NUM_RE, FRACTION_RE, GAP_RE, SIZE_RE, SPACING_SIDE_RE,
    SPACING_UNIFORM_RE, STATIC_CLASSES,
};

/// What a single recognized class translates to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassMapping {
    /// Element option invocation, if the class configures the element
    pub option: Option<String>,
    /// Text style method fragment, if the class styles text
    pub text_method: Option<String>,
    /// True when the class contributes to the combined text style
    pub is_text_style: bool,
    /// Engine package the emitted call requires
    pub needs_import: Option<ImportKey>,
}

/// The translation of a whole class string
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassOutput {
    /// Element options, direct options first in input order, then the
    /// combined padding/margin TRBL options
    pub options: Vec<String>,
    /// Text style method fragments, in input order
    pub text_methods: Vec<String>,
    /// Required engine packages, first-use order
    pub needs_imports: IndexSet<ImportKey>,
}

/// Per-side spacing accumulator in top-right-bottom-left order
///
/// The `touched` bit distinguishes "all sides zero because nothing was
/// set" from "a side was explicitly set to zero"; only a touched
/// accumulator emits an option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SideSpacing {
    top: u32,
    right: u32,
    bottom: u32,
    left: u32,
    touched: bool,
}

impl SideSpacing {
    /// Merge one side class: `t`/`r`/`b`/`l` set a single side, `x` sets
    /// left and right, `y` sets top and bottom.
    fn set(&mut self, side: char, value: u32) {
        match side {
            't' => self.top = value,
            'r' => self.right = value,
            'b' => self.bottom = value,
            'l' => self.left = value,
            'x' => {
                self.left = value;
                self.right = value;
            }
            'y' => {
                self.top = value;
                self.bottom = value;
            }
            _ => return,
        }
        self.touched = true;
    }

    fn to_option(self, name: &str) -> String {
        format!(
            "element.With{}TRBL({}, {}, {}, {})",
            name, self.top, self.right, self.bottom, self.left
        )
    }
}

/// Translate a single class.
///
/// Returns `None` for unknown classes. Side spacing classes (`pt-1`,
/// `mx-2`) translate standalone to a TRBL option with only their sides
/// set; [`parse_classes`] instead folds them into one accumulated option
/// per spacing kind.
pub fn parse_class(class: &str) -> Option<ClassMapping> {
    if let Some((option, import)) = border_color_option(class) {
        return Some(ClassMapping {
            option: Some(option),
            needs_import: Some(import),
            ..Default::default()
        });
    }

    if let Some(static_class) = STATIC_CLASSES.get(class) {
        return Some(ClassMapping {
            option: static_class.option.map(str::to_string),
            text_method: static_class.text_method.clone(),
            is_text_style: static_class.text_method.is_some(),
            needs_import: static_class.import,
        });
    }

    if let Some(caps) = SPACING_UNIFORM_RE.captures(class) {
        let value: u32 = caps[2].parse().ok()?;
        let name = if &caps[1] == "p" { "Padding" } else { "Margin" };
        return Some(option_mapping(format!("element.With{}({})", name, value)));
    }

    if let Some(caps) = SPACING_SIDE_RE.captures(class) {
        let value: u32 = caps[3].parse().ok()?;
        let side = caps[2].chars().next()?;
        let mut spacing = SideSpacing::default();
        spacing.set(side, value);
        let name = if &caps[1] == "p" { "Padding" } else { "Margin" };
        return Some(option_mapping(spacing.to_option(name)));
    }

    if let Some(caps) = GAP_RE.captures(class) {
        let value: u32 = caps[1].parse().ok()?;
        return Some(option_mapping(format!("element.WithGap({})", value)));
    }

    if let Some(caps) = SIZE_RE.captures(class) {
        let value: u32 = caps[3].parse().ok()?;
        let bound = match caps.get(1).map(|m| m.as_str()) {
            Some("min-") => "Min",
            Some("max-") => "Max",
            _ => "",
        };
        let axis = if &caps[2] == "w" { "Width" } else { "Height" };
        return Some(option_mapping(format!(
            "element.With{}{}({})",
            bound, axis, value
        )));
    }

    if let Some(caps) = FLEX_NUM_RE.captures(class) {
        let value: u32 = caps[2].parse().ok()?;
        let name = if &caps[1] == "grow" { "FlexGrow" } else { "FlexShrink" };
        return Some(option_mapping(format!("element.With{}({})", name, value)));
    }

    if let Some(caps) = FRACTION_RE.captures(class) {
        let axis = if &caps[1] == "w" { "Width" } else { "Height" };
        let (numerator, denominator) = caps[2].split_once('/')?;
        return Some(option_mapping(format!(
            "element.With{}Fraction({}, {})",
            axis, numerator, denominator
        )));
    }

    match class {
        "w-full" => Some(option_mapping("element.WithWidthFraction(1, 1)".to_string())),
        "h-full" => Some(option_mapping("element.WithHeightFraction(1, 1)".to_string())),
        "w-auto" => Some(option_mapping("element.WithWidthAuto()".to_string())),
        "h-auto" => Some(option_mapping("element.WithHeightAuto()".to_string())),
        _ => None,
    }
}

fn option_mapping(option: String) -> ClassMapping {
    ClassMapping {
        option: Some(option),
        ..Default::default()
    }
}

/// Translate a whitespace-separated class string.
///
/// Direct options keep their input order. Per-side padding and margin
/// classes are folded into accumulators and emitted as at most one
/// `WithPaddingTRBL` and one `WithMarginTRBL` option after the direct
/// options. Unknown classes are dropped silently.
pub fn parse_classes(classes: &str) -> ClassOutput {
    let mut output = ClassOutput::default();
    let mut padding = SideSpacing::default();
    let mut margin = SideSpacing::default();

    for class in classes.split_whitespace() {
        if let Some(caps) = SPACING_SIDE_RE.captures(class) {
            if let (Ok(value), Some(side)) = (caps[3].parse::<u32>(), caps[2].chars().next()) {
                if &caps[1] == "p" {
                    padding.set(side, value);
                } else {
                    margin.set(side, value);
                }
            }
            continue;
        }

        let Some(mapping) = parse_class(class) else {
            continue;
        };
        if let Some(option) = mapping.option {
            output.options.push(option);
        }
        if let Some(method) = mapping.text_method {
            output.text_methods.push(method);
        }
        if let Some(import) = mapping.needs_import {
            output.needs_imports.insert(import);
        }
    }

    if padding.touched {
        output.options.push(padding.to_option("Padding"));
    }
    if margin.touched {
        output.options.push(margin.to_option("Margin"));
    }

    output
}

/// Combine accumulated text style methods into a single element option.
///
/// Returns the empty string when there are no methods.
pub fn build_text_style_option(methods: &[String]) -> String {
    if methods.is_empty() {
        return String::new();
    }
    format!("element.WithTextStyle(tui.NewStyle().{})", methods.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_direct_option() {
        let mapping = parse_class("flex-col").expect("known class");
        assert_eq!(
            mapping.option.as_deref(),
            Some("element.WithDirection(layout.Column)")
        );
        assert!(!mapping.is_text_style);
        assert_eq!(mapping.needs_import, Some(ImportKey::Layout));
    }

    #[test]
    fn test_text_style_mapping() {
        let mapping = parse_class("text-red").expect("known class");
        assert_eq!(mapping.text_method.as_deref(), Some("Foreground(tui.Red)"));
        assert!(mapping.is_text_style);
        assert_eq!(mapping.needs_import, Some(ImportKey::Tui));
    }

    #[test]
    fn test_border_color_is_an_option() {
        let mapping = parse_class("border-green").expect("known class");
        assert_eq!(
            mapping.option.as_deref(),
            Some("element.WithBorderForeground(tui.Green)")
        );
        assert!(!mapping.is_text_style);
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(
            parse_class("gap-2").and_then(|m| m.option).as_deref(),
            Some("element.WithGap(2)")
        );
        assert_eq!(
            parse_class("w-20").and_then(|m| m.option).as_deref(),
            Some("element.WithWidth(20)")
        );
        assert_eq!(
            parse_class("min-h-3").and_then(|m| m.option).as_deref(),
            Some("element.WithMinHeight(3)")
        );
        assert_eq!(
            parse_class("flex-grow-2").and_then(|m| m.option).as_deref(),
            Some("element.WithFlexGrow(2)")
        );
        assert_eq!(
            parse_class("p-4").and_then(|m| m.option).as_deref(),
            Some("element.WithPadding(4)")
        );
    }

    #[test]
    fn test_fractional_and_keyword_sizing() {
        assert_eq!(
            parse_class("w-1/2").and_then(|m| m.option).as_deref(),
            Some("element.WithWidthFraction(1, 2)")
        );
        assert_eq!(
            parse_class("h-3/4").and_then(|m| m.option).as_deref(),
            Some("element.WithHeightFraction(3, 4)")
        );
        assert_eq!(
            parse_class("w-full").and_then(|m| m.option).as_deref(),
            Some("element.WithWidthFraction(1, 1)")
        );
        assert_eq!(
            parse_class("w-auto").and_then(|m| m.option).as_deref(),
            Some("element.WithWidthAuto()")
        );
    }

    #[test]
    fn test_unknown_class_is_none() {
        assert!(parse_class("sparkle").is_none());
        assert!(parse_class("w-2/5").is_none());
        assert!(parse_class("p-").is_none());
        assert!(parse_class("text-salmon").is_none());
    }

    #[test]
    fn test_standalone_side_class() {
        let mapping = parse_class("pt-3").expect("known class");
        assert_eq!(
            mapping.option.as_deref(),
            Some("element.WithPaddingTRBL(3, 0, 0, 0)")
        );
    }

    #[test]
    fn test_spacing_accumulator_tr_bl() {
        let output = parse_classes("pt-1 pb-2 mt-3 mb-4");
        assert_eq!(
            output.options,
            vec![
                "element.WithPaddingTRBL(1, 0, 2, 0)".to_string(),
                "element.WithMarginTRBL(3, 0, 4, 0)".to_string(),
            ]
        );
        assert!(output.needs_imports.is_empty());
        assert!(output.text_methods.is_empty());
    }

    #[test]
    fn test_spacing_x_y_merge() {
        let output = parse_classes("px-2 py-1");
        assert_eq!(output.options, vec!["element.WithPaddingTRBL(1, 2, 1, 2)".to_string()]);
    }

    #[test]
    fn test_uniform_spacing_bypasses_accumulator() {
        let output = parse_classes("p-4 mt-1");
        assert_eq!(
            output.options,
            vec![
                "element.WithPadding(4)".to_string(),
                "element.WithMarginTRBL(1, 0, 0, 0)".to_string(),
            ]
        );
    }

    #[test]
    fn test_accumulated_option_after_direct_options() {
        let output = parse_classes("pt-1 flex gap-2 ml-3");
        assert_eq!(
            output.options,
            vec![
                "element.WithDirection(layout.Row)".to_string(),
                "element.WithGap(2)".to_string(),
                "element.WithPaddingTRBL(1, 0, 0, 0)".to_string(),
                "element.WithMarginTRBL(0, 0, 0, 3)".to_string(),
            ]
        );
    }

    #[test]
    fn test_later_side_class_wins() {
        let output = parse_classes("px-2 pl-5");
        assert_eq!(output.options, vec!["element.WithPaddingTRBL(0, 2, 0, 5)".to_string()]);
    }

    #[test]
    fn test_full_mix() {
        let output = parse_classes("flex flex-col gap-2 p-4 font-bold text-red");
        assert_eq!(
            output.options,
            vec![
                "element.WithDirection(layout.Row)".to_string(),
                "element.WithDirection(layout.Column)".to_string(),
                "element.WithGap(2)".to_string(),
                "element.WithPadding(4)".to_string(),
            ]
        );
        assert_eq!(
            output.text_methods,
            vec!["Bold()".to_string(), "Foreground(tui.Red)".to_string()]
        );
        let imports: Vec<_> = output.needs_imports.iter().copied().collect();
        assert_eq!(imports, vec![ImportKey::Layout, ImportKey::Tui]);
    }

    #[test]
    fn test_unknown_classes_dropped_silently() {
        let output = parse_classes("flex sparkle gap-2");
        assert_eq!(output.options.len(), 2);
    }

    #[test]
    fn test_determinism() {
        let a = parse_classes("flex pt-1 text-red gap-3 mx-2");
        let b = parse_classes("flex pt-1 text-red gap-3 mx-2");
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_insensitivity() {
        let a = parse_classes("flex   gap-2\tpt-1");
        let b = parse_classes(" flex gap-2 pt-1 ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_text_style_option() {
        assert_eq!(build_text_style_option(&[]), "");
        assert_eq!(
            build_text_style_option(&["Bold()".to_string()]),
            "element.WithTextStyle(tui.NewStyle().Bold())"
        );
        assert_eq!(
            build_text_style_option(&[
                "Bold()".to_string(),
                "Foreground(tui.Cyan)".to_string()
            ]),
            "element.WithTextStyle(tui.NewStyle().Bold().Foreground(tui.Cyan))"
        );
    }
}
