//! The property catalog: every recognized prop key, its partial, and its
//! branch rule.
//!
//! The catalog is process-wide immutable static configuration — a closed
//! enumeration dispatched by name, so exhaustiveness stays checkable at
//! compile time. Prop keys a caller passes that are not in this catalog are
//! not an error: the resolver passes their raw values through prefixed.

use super::branch::{prepare, Branch, PrepareFn};

macro_rules! catalog {
    (@prepare) => {
        None
    };
    (@prepare $prepare:path) => {
        Some($prepare as PrepareFn)
    };
    ($($variant:ident ($name:literal) => $partial:literal $(, $prepare:path)?;)+) => {
        /// A recognized style prop.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Property {
            $($variant,)+
        }

        impl Property {
            /// Every recognized property, in catalog order.
            pub const ALL: &'static [Property] = &[$(Property::$variant),+];

            /// Look up a property by prop-key name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The prop-key name this property is addressed by.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// The branch rule for this property.
            pub(crate) fn branch(self) -> Branch {
                match self {
                    $(Self::$variant => Branch::new($partial, catalog!(@prepare $($prepare)?)),)+
                }
            }
        }
    };
}

catalog! {
    AccentColor ("accentColor") => "accent";
    AlignContent ("alignContent") => "content";
    AlignItems ("alignItems") => "items";
    AlignSelf ("alignSelf") => "self";
    Animation ("animation") => "animate";
    Appearance ("appearance") => "appearance";
    AspectRatio ("aspectRatio") => "aspect";
    BackdropFilter ("backdropFilter") => "backdrop";
    BackgroundAttachment ("backgroundAttachment") => "bg";
    BackgroundBlendMode ("backgroundBlendMode") => "bg-blend";
    BackgroundClip ("backgroundClip") => "bg-clip";
    BackgroundColor ("backgroundColor") => "bg";
    BackgroundImage ("backgroundImage") => "bg";
    BackgroundOrigin ("backgroundOrigin") => "bg-origin";
    BackgroundPosition ("backgroundPosition") => "bg";
    BackgroundRepeat ("backgroundRepeat") => "bg";
    BackgroundSize ("backgroundSize") => "bg";
    Bg ("bg") => "bg";
    BorderBottomColor ("borderBottomColor") => "border-b";
    BorderBottomLeftRadius ("borderBottomLeftRadius") => "rounded-bl";
    BorderBottomRightRadius ("borderBottomRightRadius") => "rounded-br";
    BorderBottomWidth ("borderBottomWidth") => "border-b", prepare::border_width;
    BorderCollapse ("borderCollapse") => "border";
    BorderColor ("borderColor") => "border";
    BorderLeftColor ("borderLeftColor") => "border-l";
    BorderLeftWidth ("borderLeftWidth") => "border-l", prepare::border_width;
    BorderRadius ("borderRadius") => "rounded";
    BorderRightColor ("borderRightColor") => "border-r";
    BorderRightWidth ("borderRightWidth") => "border-r", prepare::border_width;
    BorderSpacing ("borderSpacing") => "border-spacing";
    BorderStyle ("borderStyle") => "border";
    BorderTopColor ("borderTopColor") => "border-t";
    BorderTopLeftRadius ("borderTopLeftRadius") => "rounded-tl";
    BorderTopRightRadius ("borderTopRightRadius") => "rounded-tr";
    BorderTopWidth ("borderTopWidth") => "border-t", prepare::border_width;
    BorderWidth ("borderWidth") => "border", prepare::border_width;
    Bottom ("bottom") => "bottom";
    BoxDecorationBreak ("boxDecorationBreak") => "box-decoration";
    BoxShadow ("boxShadow") => "shadow", prepare::bare_on_default;
    BoxShadowColor ("boxShadowColor") => "shadow";
    BoxSizing ("boxSizing") => "box";
    BreakAfter ("breakAfter") => "break-after";
    BreakBefore ("breakBefore") => "break-before";
    BreakInside ("breakInside") => "break-inside";
    CaptionSide ("captionSide") => "caption";
    CaretColor ("caretColor") => "caret";
    Clear ("clear") => "clear";
    Color ("color") => "text";
    ColumnGap ("columnGap") => "gap-x";
    Columns ("columns") => "columns";
    Content ("content") => "content";
    // The trailing hyphen is part of the catalog's output contract.
    Cursor ("cursor") => "cursor-";
    Display ("display") => "", prepare::display;
    Fill ("fill") => "fill";
    Filter ("filter") => "";
    Flex ("flex") => "flex";
    FlexBasis ("flexBasis") => "basis";
    FlexDirection ("flexDirection") => "flex";
    FlexGrow ("flexGrow") => "grow", prepare::flex_keyword;
    FlexShrink ("flexShrink") => "shrink", prepare::flex_keyword;
    FlexWrap ("flexWrap") => "flex";
    Float ("float") => "float";
    FontFamily ("fontFamily") => "font";
    FontSize ("fontSize") => "text";
    FontSmoothing ("fontSmoothing") => "";
    FontStyle ("fontStyle") => "";
    FontVariantNumeric ("fontVariantNumeric") => "";
    FontWeight ("fontWeight") => "font", prepare::font_weight;
    Gap ("gap") => "gap";
    GridAutoColumns ("gridAutoColumns") => "auto-cols";
    GridAutoFlow ("gridAutoFlow") => "grid-flow";
    GridAutoRows ("gridAutoRows") => "auto-rows";
    GridColumn ("gridColumn") => "col-span";
    GridColumnEnd ("gridColumnEnd") => "col-end";
    GridColumnStart ("gridColumnStart") => "col-start";
    GridRow ("gridRow") => "row";
    GridRowEnd ("gridRowEnd") => "row-end";
    GridRowStart ("gridRowStart") => "row-start";
    GridTemplateColumns ("gridTemplateColumns") => "grid-cols";
    GridTemplateRows ("gridTemplateRows") => "grid-rows";
    H ("h") => "h";
    Hyphens ("hyphens") => "hyphens";
    Inset ("inset") => "inset";
    Isolation ("isolation") => "isolation", prepare::isolation;
    JustifyContent ("justifyContent") => "justify";
    JustifyItems ("justifyItems") => "justify-items";
    JustifySelf ("justifySelf") => "justify-self";
    Left ("left") => "left";
    LetterSpacing ("letterSpacing") => "tracking";
    LineClamp ("lineClamp") => "line-clamp";
    LineHeight ("lineHeight") => "leading";
    ListStyleImage ("listStyleImage") => "list-image";
    ListStylePosition ("listStylePosition") => "list";
    ListStyleType ("listStyleType") => "list";
    M ("m") => "m";
    MaxHeight ("maxHeight") => "max-h";
    MaxWidth ("maxWidth") => "max-w";
    Mb ("mb") => "mb";
    Me ("me") => "me";
    MinHeight ("minHeight") => "min-h";
    MinWidth ("minWidth") => "min-w";
    MixBlendMode ("mixBlendMode") => "mix-blend";
    // ml/mr resolve through the logical-margin partial.
    Ml ("ml") => "me";
    Mr ("mr") => "me";
    Ms ("ms") => "ms";
    Mt ("mt") => "mt";
    Mx ("mx") => "mx";
    My ("my") => "my";
    ObjectFit ("objectFit") => "object";
    ObjectPosition ("objectPosition") => "object";
    Opacity ("opacity") => "opacity";
    Order ("order") => "order";
    OutlineColor ("outlineColor") => "outline";
    OutlineOffset ("outlineOffset") => "outline-offset";
    OutlineStyle ("outlineStyle") => "outline", prepare::outline_style;
    OutlineWidth ("outlineWidth") => "outline", prepare::border_width;
    Overflow ("overflow") => "overflow";
    OverflowX ("overflowX") => "overflow-x";
    OverflowY ("overflowY") => "overflow-y";
    OverscrollBehavior ("overscrollBehavior") => "overscroll";
    OverscrollBehaviorX ("overscrollBehaviorX") => "overscroll-x";
    OverscrollBehaviorY ("overscrollBehaviorY") => "overscroll-y";
    P ("p") => "p";
    Pb ("pb") => "pb";
    Pe ("pe") => "pe";
    Pl ("pl") => "pl";
    PlaceContent ("placeContent") => "place-content";
    PlaceItems ("placeItems") => "place-items";
    PlaceSelf ("placeSelf") => "place-self";
    PointerEvents ("pointerEvents") => "pointer-events";
    Position ("position") => "";
    Pr ("pr") => "pr";
    Ps ("ps") => "ps";
    Pt ("pt") => "pt";
    Px ("px") => "px";
    Py ("py") => "py";
    Resize ("resize") => "resize", prepare::resize;
    Right ("right") => "right";
    RowGap ("rowGap") => "gap-y";
    ScrollMargin ("scrollMargin") => "scroll-m";
    ScrollPadding ("scrollPadding") => "scroll-p";
    ScrollSnapAlign ("scrollSnapAlign") => "snap";
    ScrollSnapStop ("scrollSnapStop") => "snap";
    ScrollSnapType ("scrollSnapType") => "snap", prepare::scroll_snap_type;
    StrokeColor ("strokeColor") => "stroke";
    StrokeWidth ("strokeWidth") => "stroke";
    TableLayout ("tableLayout") => "table";
    TextAlign ("textAlign") => "text";
    TextDecoration ("textDecoration") => "";
    TextDecorationColor ("textDecorationColor") => "decoration";
    TextDecorationStyle ("textDecorationStyle") => "decoration";
    TextDecorationThickness ("textDecorationThickness") => "decoration";
    TextIndent ("textIndent") => "indent";
    TextOverflow ("textOverflow") => "text", prepare::text_overflow;
    TextTransform ("textTransform") => "", prepare::text_transform;
    TextUnderlineOffset ("textUnderlineOffset") => "underline-offset";
    Top ("top") => "top";
    TouchAction ("touchAction") => "touch";
    Transform ("transform") => "";
    TransformOrigin ("transformOrigin") => "origin";
    TransitionDelay ("transitionDelay") => "delay";
    TransitionDuration ("transitionDuration") => "duration";
    TransitionProperty ("transitionProperty") => "transition", prepare::bare_on_default;
    TransitionTimingFunction ("transitionTimingFunction") => "ease";
    UserSelect ("userSelect") => "select";
    VerticalAlign ("verticalAlign") => "align";
    Visibility ("visibility") => "";
    W ("w") => "w";
    WhiteSpace ("whiteSpace") => "whitespace";
    WillChange ("willChange") => "will-change";
    WordBreak ("wordBreak") => "break";
    ZIndex ("zIndex") => "z";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_size() {
        assert_eq!(Property::ALL.len(), 172);
    }

    #[test]
    fn names_round_trip() {
        for property in Property::ALL {
            assert_eq!(Property::from_name(property.name()), Some(*property));
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Property::from_name("notAProp"), None);
        assert_eq!(Property::from_name(""), None);
        // Lookup is by exact prop key, not CSS name.
        assert_eq!(Property::from_name("background-color"), None);
    }

    #[test]
    fn partial_spot_checks() {
        assert_eq!(Property::Bg.branch().resolve(&"red-100".into()), "bg-red-100");
        assert_eq!(Property::Color.branch().resolve(&"red-100".into()), "text-red-100");
        assert_eq!(Property::BorderRadius.branch().resolve(&"default".into()), "rounded");
        assert_eq!(Property::LetterSpacing.branch().resolve(&"wide".into()), "tracking-wide");
        assert_eq!(Property::ZIndex.branch().resolve(&crate::types::Scalar::from(10)), "z-10");
    }

    #[test]
    fn catalog_quirks_preserved() {
        // ml/mr resolve through the `me` partial.
        assert_eq!(Property::Ml.branch().resolve(&"2".into()), "me-2");
        assert_eq!(Property::Mr.branch().resolve(&"2".into()), "me-2");
        // cursor's partial carries a trailing hyphen.
        assert_eq!(Property::Cursor.branch().resolve(&"pointer".into()), "cursor--pointer");
        // flexShrink "1" emits the grow keyword.
        assert_eq!(Property::FlexShrink.branch().resolve(&"1".into()), "grow");
    }
}
