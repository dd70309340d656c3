//! Static class tables, compiled patterns, and the documentation catalog.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

/// Engine package an emitted call requires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImportKey {
    /// The layout package (directions, alignment, overflow)
    Layout,
    /// The tui package (styles, colors, borders)
    Tui,
}

impl ImportKey {
    /// The import key as it appears in generated import lists
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportKey::Layout => "layout",
            ImportKey::Tui => "tui",
        }
    }
}

/// A statically-known class: its option and/or text style method
#[derive(Clone, Debug)]
pub(crate) struct StaticClass {
    pub option: Option<&'static str>,
    pub text_method: Option<String>,
    pub import: Option<ImportKey>,
}

impl StaticClass {
    fn option(option: &'static str, import: Option<ImportKey>) -> Self {
        Self {
            option: Some(option),
            text_method: None,
            import,
        }
    }

    fn style(method: impl Into<String>) -> Self {
        Self {
            option: None,
            text_method: Some(method.into()),
            // text styles chain onto tui.NewStyle()
            import: Some(ImportKey::Tui),
        }
    }
}

/// The eight recognized color names, with their engine constant spelling
pub(crate) const COLORS: [(&str, &str); 8] = [
    ("red", "Red"),
    ("green", "Green"),
    ("blue", "Blue"),
    ("cyan", "Cyan"),
    ("magenta", "Magenta"),
    ("yellow", "Yellow"),
    ("white", "White"),
    ("black", "Black"),
];

/// Statically-known classes, keyed by class name
pub(crate) static STATIC_CLASSES: Lazy<FxHashMap<String, StaticClass>> = Lazy::new(|| {
    use ImportKey::{Layout, Tui};

    let mut map = FxHashMap::default();
    let mut put = |name: &str, class: StaticClass| {
        map.insert(name.to_string(), class);
    };

    // layout direction
    put("flex", StaticClass::option("element.WithDirection(layout.Row)", Some(Layout)));
    put("flex-row", StaticClass::option("element.WithDirection(layout.Row)", Some(Layout)));
    put("flex-col", StaticClass::option("element.WithDirection(layout.Column)", Some(Layout)));

    // flex grow/shrink defaults
    put("flex-grow", StaticClass::option("element.WithFlexGrow(1)", None));
    put("flex-shrink", StaticClass::option("element.WithFlexShrink(1)", None));

    // justify-content
    put("justify-start", StaticClass::option("element.WithJustifyContent(layout.JustifyStart)", Some(Layout)));
    put("justify-center", StaticClass::option("element.WithJustifyContent(layout.JustifyCenter)", Some(Layout)));
    put("justify-end", StaticClass::option("element.WithJustifyContent(layout.JustifyEnd)", Some(Layout)));
    put("justify-between", StaticClass::option("element.WithJustifyContent(layout.JustifySpaceBetween)", Some(Layout)));
    put("justify-around", StaticClass::option("element.WithJustifyContent(layout.JustifySpaceAround)", Some(Layout)));
    put("justify-evenly", StaticClass::option("element.WithJustifyContent(layout.JustifySpaceEvenly)", Some(Layout)));

    // align-items
    put("items-start", StaticClass::option("element.WithAlignItems(layout.AlignStart)", Some(Layout)));
    put("items-center", StaticClass::option("element.WithAlignItems(layout.AlignCenter)", Some(Layout)));
    put("items-end", StaticClass::option("element.WithAlignItems(layout.AlignEnd)", Some(Layout)));
    put("items-stretch", StaticClass::option("element.WithAlignItems(layout.AlignStretch)", Some(Layout)));

    // align-self
    put("self-start", StaticClass::option("element.WithAlignSelf(layout.AlignStart)", Some(Layout)));
    put("self-center", StaticClass::option("element.WithAlignSelf(layout.AlignCenter)", Some(Layout)));
    put("self-end", StaticClass::option("element.WithAlignSelf(layout.AlignEnd)", Some(Layout)));
    put("self-stretch", StaticClass::option("element.WithAlignSelf(layout.AlignStretch)", Some(Layout)));

    // borders
    put("border", StaticClass::option("element.WithBorder(tui.NormalBorder)", Some(Tui)));
    put("border-rounded", StaticClass::option("element.WithBorder(tui.RoundedBorder)", Some(Tui)));
    put("border-double", StaticClass::option("element.WithBorder(tui.DoubleBorder)", Some(Tui)));
    put("border-thick", StaticClass::option("element.WithBorder(tui.ThickBorder)", Some(Tui)));

    // overflow
    put("overflow-scroll", StaticClass::option("element.WithOverflow(layout.Scroll)", Some(Layout)));
    put("overflow-y-scroll", StaticClass::option("element.WithOverflowY(layout.Scroll)", Some(Layout)));
    put("overflow-x-scroll", StaticClass::option("element.WithOverflowX(layout.Scroll)", Some(Layout)));

    // text alignment
    put("text-left", StaticClass::option("element.WithTextAlign(layout.AlignLeft)", Some(Layout)));
    put("text-center", StaticClass::option("element.WithTextAlign(layout.AlignCenter)", Some(Layout)));
    put("text-right", StaticClass::option("element.WithTextAlign(layout.AlignRight)", Some(Layout)));

    // text style methods
    put("font-bold", StaticClass::style("Bold()"));
    put("font-dim", StaticClass::style("Faint()"));
    put("italic", StaticClass::style("Italic()"));
    put("underline", StaticClass::style("Underline()"));
    put("blink", StaticClass::style("Blink()"));
    put("reverse", StaticClass::style("Reverse()"));
    put("strikethrough", StaticClass::style("Strikethrough()"));

    // colors: foreground, background, border foreground
    for (name, constant) in COLORS {
        map.insert(
            format!("text-{name}"),
            StaticClass::style(format!("Foreground(tui.{constant})")),
        );
        map.insert(
            format!("bg-{name}"),
            StaticClass::style(format!("Background(tui.{constant})")),
        );
        map.insert(
            format!("border-{name}"),
            StaticClass {
                option: None,
                text_method: None,
                import: Some(Tui),
            },
        );
    }

    map
});

/// Border-foreground options need a formatted string, so they are resolved
/// separately from the static table
pub(crate) fn border_color_option(class: &str) -> Option<(String, ImportKey)> {
    let name = class.strip_prefix("border-")?;
    let (_, constant) = COLORS.iter().find(|(n, _)| *n == name)?;
    Some((
        format!("element.WithBorderForeground(tui.{constant})"),
        ImportKey::Tui,
    ))
}

// Compiled patterns for the dynamic numeric class forms
pub(crate) static SPACING_SIDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([pm])([trblxy])-(\d+)$").expect("spacing side pattern")
});
pub(crate) static SPACING_UNIFORM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([pm])-(\d+)$").expect("uniform spacing pattern"));
pub(crate) static GAP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^gap-(\d+)$").expect("gap pattern"));
pub(crate) static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(min-|max-)?([wh])-(\d+)$").expect("size pattern"));
pub(crate) static FLEX_NUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^flex-(grow|shrink)-(\d+)$").expect("flex number pattern"));
pub(crate) static FRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([wh])-(1/2|1/3|2/3|1/4|3/4)$").expect("fraction pattern"));

/// A catalog entry describing one class (or class pattern) for external
/// documentation and completion tooling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

const CATALOG: &[ClassInfo] = &[
    // layout
    ClassInfo { name: "flex", category: "layout", description: "row layout direction", example: "<box class=\"flex\">" },
    ClassInfo { name: "flex-row", category: "layout", description: "row layout direction", example: "<box class=\"flex-row\">" },
    ClassInfo { name: "flex-col", category: "layout", description: "column layout direction", example: "<box class=\"flex-col\">" },
    ClassInfo { name: "justify-start", category: "layout", description: "pack children at the main-axis start", example: "<box class=\"flex justify-start\">" },
    ClassInfo { name: "justify-center", category: "layout", description: "center children on the main axis", example: "<box class=\"flex justify-center\">" },
    ClassInfo { name: "justify-end", category: "layout", description: "pack children at the main-axis end", example: "<box class=\"flex justify-end\">" },
    ClassInfo { name: "justify-between", category: "layout", description: "distribute children with space between", example: "<box class=\"flex justify-between\">" },
    ClassInfo { name: "justify-around", category: "layout", description: "distribute children with space around", example: "<box class=\"flex justify-around\">" },
    ClassInfo { name: "justify-evenly", category: "layout", description: "distribute children evenly", example: "<box class=\"flex justify-evenly\">" },
    ClassInfo { name: "items-start", category: "layout", description: "align children at the cross-axis start", example: "<box class=\"flex items-start\">" },
    ClassInfo { name: "items-center", category: "layout", description: "center children on the cross axis", example: "<box class=\"flex items-center\">" },
    ClassInfo { name: "items-end", category: "layout", description: "align children at the cross-axis end", example: "<box class=\"flex items-end\">" },
    ClassInfo { name: "items-stretch", category: "layout", description: "stretch children on the cross axis", example: "<box class=\"flex items-stretch\">" },
    ClassInfo { name: "self-start", category: "layout", description: "align this element at the cross-axis start", example: "<box class=\"self-start\">" },
    ClassInfo { name: "self-center", category: "layout", description: "center this element on the cross axis", example: "<box class=\"self-center\">" },
    ClassInfo { name: "self-end", category: "layout", description: "align this element at the cross-axis end", example: "<box class=\"self-end\">" },
    ClassInfo { name: "self-stretch", category: "layout", description: "stretch this element on the cross axis", example: "<box class=\"self-stretch\">" },
    ClassInfo { name: "overflow-scroll", category: "layout", description: "scroll overflowing content", example: "<box class=\"overflow-scroll\">" },
    ClassInfo { name: "overflow-y-scroll", category: "layout", description: "scroll vertical overflow", example: "<box class=\"overflow-y-scroll\">" },
    ClassInfo { name: "overflow-x-scroll", category: "layout", description: "scroll horizontal overflow", example: "<box class=\"overflow-x-scroll\">" },
    ClassInfo { name: "w-<n>", category: "layout", description: "fixed width in cells", example: "<box class=\"w-20\">" },
    ClassInfo { name: "h-<n>", category: "layout", description: "fixed height in cells", example: "<box class=\"h-5\">" },
    ClassInfo { name: "min-w-<n>", category: "layout", description: "minimum width in cells", example: "<box class=\"min-w-10\">" },
    ClassInfo { name: "max-w-<n>", category: "layout", description: "maximum width in cells", example: "<box class=\"max-w-40\">" },
    ClassInfo { name: "min-h-<n>", category: "layout", description: "minimum height in cells", example: "<box class=\"min-h-3\">" },
    ClassInfo { name: "max-h-<n>", category: "layout", description: "maximum height in cells", example: "<box class=\"max-h-12\">" },
    ClassInfo { name: "w-1/2", category: "layout", description: "fractional width", example: "<box class=\"w-1/2\">" },
    ClassInfo { name: "w-full", category: "layout", description: "full available width", example: "<box class=\"w-full\">" },
    ClassInfo { name: "w-auto", category: "layout", description: "width from content", example: "<box class=\"w-auto\">" },
    ClassInfo { name: "h-full", category: "layout", description: "full available height", example: "<box class=\"h-full\">" },
    ClassInfo { name: "h-auto", category: "layout", description: "height from content", example: "<box class=\"h-auto\">" },
    // flex
    ClassInfo { name: "flex-grow", category: "flex", description: "grow to fill free space", example: "<box class=\"flex-grow\">" },
    ClassInfo { name: "flex-shrink", category: "flex", description: "shrink when space is tight", example: "<box class=\"flex-shrink\">" },
    ClassInfo { name: "flex-grow-<n>", category: "flex", description: "grow with the given factor", example: "<box class=\"flex-grow-2\">" },
    ClassInfo { name: "flex-shrink-<n>", category: "flex", description: "shrink with the given factor", example: "<box class=\"flex-shrink-0\">" },
    // spacing
    ClassInfo { name: "gap-<n>", category: "spacing", description: "gap between children", example: "<box class=\"flex gap-2\">" },
    ClassInfo { name: "p-<n>", category: "spacing", description: "uniform padding", example: "<box class=\"p-2\">" },
    ClassInfo { name: "pt-<n> pr-<n> pb-<n> pl-<n>", category: "spacing", description: "per-side padding, folded into one TRBL option", example: "<box class=\"pt-1 pb-2\">" },
    ClassInfo { name: "px-<n> py-<n>", category: "spacing", description: "horizontal / vertical padding", example: "<box class=\"px-2 py-1\">" },
    ClassInfo { name: "m-<n>", category: "spacing", description: "uniform margin", example: "<box class=\"m-1\">" },
    ClassInfo { name: "mt-<n> mr-<n> mb-<n> ml-<n>", category: "spacing", description: "per-side margin, folded into one TRBL option", example: "<box class=\"mt-1 mb-1\">" },
    ClassInfo { name: "mx-<n> my-<n>", category: "spacing", description: "horizontal / vertical margin", example: "<box class=\"mx-2\">" },
    // typography
    ClassInfo { name: "font-bold", category: "typography", description: "bold text", example: "<text class=\"font-bold\">" },
    ClassInfo { name: "font-dim", category: "typography", description: "faint text", example: "<text class=\"font-dim\">" },
    ClassInfo { name: "italic", category: "typography", description: "italic text", example: "<text class=\"italic\">" },
    ClassInfo { name: "underline", category: "typography", description: "underlined text", example: "<text class=\"underline\">" },
    ClassInfo { name: "blink", category: "typography", description: "blinking text", example: "<text class=\"blink\">" },
    ClassInfo { name: "reverse", category: "typography", description: "reverse video", example: "<text class=\"reverse\">" },
    ClassInfo { name: "strikethrough", category: "typography", description: "struck-through text", example: "<text class=\"strikethrough\">" },
    ClassInfo { name: "text-left", category: "typography", description: "left-align text", example: "<text class=\"text-left\">" },
    ClassInfo { name: "text-center", category: "typography", description: "center text", example: "<text class=\"text-center\">" },
    ClassInfo { name: "text-right", category: "typography", description: "right-align text", example: "<text class=\"text-right\">" },
    ClassInfo { name: "text-<color>", category: "typography", description: "foreground color (red green blue cyan magenta yellow white black)", example: "<text class=\"text-cyan\">" },
    // visual
    ClassInfo { name: "bg-<color>", category: "visual", description: "background color", example: "<box class=\"bg-blue\">" },
    ClassInfo { name: "border", category: "visual", description: "normal border", example: "<box class=\"border\">" },
    ClassInfo { name: "border-rounded", category: "visual", description: "rounded border", example: "<box class=\"border-rounded\">" },
    ClassInfo { name: "border-double", category: "visual", description: "double border", example: "<box class=\"border-double\">" },
    ClassInfo { name: "border-thick", category: "visual", description: "thick border", example: "<box class=\"border-thick\">" },
    ClassInfo { name: "border-<color>", category: "visual", description: "border foreground color", example: "<box class=\"border border-green\">" },
];

/// The class catalog used by documentation and completion tooling
pub fn all_classes() -> &'static [ClassInfo] {
    CATALOG
}
