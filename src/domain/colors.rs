//! Named color table
//!
//! Canonical keys are lowercase, space-free CSS color names. The editor
//! accepts them with spaces ("light coral"), so lookups strip whitespace first.

/// A color the learner can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedColor {
    pub key: &'static str,
    pub hex: &'static str,
    pub label: &'static str,
}

const fn named(key: &'static str, hex: &'static str, label: &'static str) -> NamedColor {
    NamedColor { key, hex, label }
}

pub const COLORS: &[NamedColor] = &[
    named("lightcoral", "#F08080", "light coral"),
    named("salmon", "#FA8072", "salmon"),
    named("darksalmon", "#E9967A", "dark salmon"),
    named("lightsalmon", "#FFA07A", "light salmon"),
    named("crimson", "#DC143C", "crimson"),
    named("red", "#FF0000", "red"),
    named("firebrick", "#B22222", "firebrick"),
    named("darkred", "#8B0000", "dark red"),
    named("pink", "#FFC0CB", "pink"),
    named("lightpink", "#FFB6C1", "light pink"),
    named("hotpink", "#FF69B4", "hot pink"),
    named("deeppink", "#FF1493", "deep pink"),
    named("mediumvioletred", "#C71585", "medium violet red"),
    named("palevioletred", "#DB7093", "pale violet red"),
    named("lightgray", "#D3D3D3", "light gray"),
    named("gray", "#808080", "gray"),
    named("darkgray", "#A9A9A9", "dark gray"),
    named("dimgrey", "#696969", "dim grey"),
    named("black", "#000000", "black"),
    named("white", "#FFFFFF", "white"),
    named("whitesmoke", "#F5F5F5", "white smoke"),
    named("snow", "#FFFAFA", "snow"),
    named("rosybrown", "#BC8F8F", "rosy brown"),
    named("brown", "#A52A2A", "brown"),
    named("maroon", "#800000", "maroon"),
    named("mistyrose", "#FFE4E1", "misty rose"),
    named("lavenderblush", "#FFF0F5", "lavender blush"),
    named("seashell", "#FFF5EE", "seashell"),
    named("lightgoldenrodyellow", "#FAFAD2", "light goldenrod yellow"),
    named("lemonchiffon", "#FFFACD", "lemon chiffon"),
    named("honeydew", "#F0FFF0", "honeydew"),
    named("floralwhite", "#FFFAF0", "floral white"),
    named("oldlace", "#FDF5E6", "old lace"),
    named("cornsilk", "#FFF8DC", "cornsilk"),
    named("linen", "#FAF0E6", "linen"),
    named("antiquewhite", "#FAEBD7", "antique white"),
    named("ivory", "#FFFFF0", "ivory"),
    named("beige", "#F5F5DC", "beige"),
    named("lightyellow", "#FFFFE0", "light yellow"),
    named("lightcyan", "#E0FFFF", "light cyan"),
    named("lavender", "#E6E6FA", "lavender"),
    named("thistle", "#D8BFD8", "thistle"),
    named("plum", "#DDA0DD", "plum"),
    named("violet", "#EE82EE", "violet"),
    named("orchid", "#DA70D6", "orchid"),
    named("mediumorchid", "#BA55D3", "medium orchid"),
    named("blueviolet", "#8A2BE2", "blue violet"),
    named("darkviolet", "#9400D3", "dark violet"),
    named("darkorchid", "#9932CC", "dark orchid"),
    named("darkmagenta", "#8B008B", "dark magenta"),
    named("purple", "#800080", "purple"),
    named("indigo", "#4B0082", "indigo"),
    named("darkslateblue", "#483D8B", "dark slate blue"),
    named("slateblue", "#6A5ACD", "slate blue"),
    named("mediumslateblue", "#7B68EE", "medium slate blue"),
    named("greenyellow", "#ADFF2F", "green yellow"),
    named("chartreuse", "#7FFF00", "chartreuse"),
    named("lawngreen", "#7CFC00", "lawn green"),
    named("lime", "#00FF00", "lime"),
    named("limegreen", "#32CD32", "lime green"),
    named("palegreen", "#98FB98", "pale green"),
    named("lightgreen", "#90EE90", "light green"),
    named("mediumseagreen", "#3CB371", "medium sea green"),
    named("seagreen", "#2E8B57", "sea green"),
    named("forestgreen", "#228B22", "forest green"),
    named("green", "#008000", "green"),
    named("darkgreen", "#006400", "dark green"),
    named("yellowgreen", "#9ACD32", "yellow green"),
    named("olivedrab", "#6B8E23", "olive drab"),
    named("olive", "#808000", "olive"),
    named("darkolivegreen", "#556B2F", "dark olive green"),
    named("mediumaquamarine", "#66CDAA", "medium aquamarine"),
    named("darkseagreen", "#8FBC8F", "dark sea green"),
    named("darkkhaki", "#BDB76B", "dark khaki"),
    named("gold", "#FFD700", "gold"),
    named("khaki", "#F0E68C", "khaki"),
    named("peachpuff", "#FFDAB9", "peach puff"),
    named("orange", "#FFA500", "orange"),
    named("darkorange", "#FF8C00", "dark orange"),
    named("orangered", "#FF4500", "orange red"),
    named("tomato", "#FF6347", "tomato"),
    named("coral", "#FF7F50", "coral"),
    named("darkgoldenrod", "#B8860B", "dark goldenrod"),
    named("peru", "#CD853F", "peru"),
    named("blanchedalmond", "#FFEBCD", "blanched almond"),
    named("bisque", "#FFE4C4", "bisque"),
    named("navajowhite", "#FFDEAD", "navajo white"),
    named("burlywood", "#DEB887", "burlywood"),
    named("tan", "#D2B48C", "tan"),
    named("chocolate", "#D2691E", "chocolate"),
    named("saddlebrown", "#8B4513", "saddle brown"),
    named("sienna", "#A0522D", "sienna"),
    named("sandybrown", "#F4A460", "sandy brown"),
    named("wheat", "#F5DEB3", "wheat"),
    named("silver", "#C0C0C0", "silver"),
    named("darkcyan", "#008B8B", "dark cyan"),
    named("cadetblue", "#5F9EA0", "cadet blue"),
    named("steelblue", "#4682B4", "steel blue"),
    named("lightsteelblue", "#B0C4DE", "light steel blue"),
    named("powderblue", "#B0E0E6", "powder blue"),
    named("lightblue", "#ADD8E6", "light blue"),
    named("skyblue", "#87CEEB", "sky blue"),
    named("lightskyblue", "#87CEFA", "light sky blue"),
    named("deepskyblue", "#00BFFF", "deep sky blue"),
    named("dodgerblue", "#1E90FF", "dodger blue"),
    named("cornflowerblue", "#6495ED", "cornflower blue"),
    named("royalblue", "#4169E1", "royal blue"),
    named("blue", "#0000FF", "blue"),
    named("mediumblue", "#0000CD", "medium blue"),
    named("darkblue", "#00008B", "dark blue"),
    named("navy", "#000080", "navy"),
    named("midnightblue", "#191970", "midnight blue"),
    named("lightseagreen", "#20B2AA", "light sea green"),
    named("darkturquoise", "#00CED1", "dark turquoise"),
    named("mediumturquoise", "#48D1CC", "medium turquoise"),
    named("turquoise", "#40E0D0", "turquoise"),
    named("aqua", "#00FFFF", "aqua"),
    named("cyan", "#00FFFF", "cyan"),
    named("paleturquoise", "#AFEEEE", "pale turquoise"),
    named("mediumspringgreen", "#00FA9A", "medium spring green"),
    named("springgreen", "#00FF7F", "spring green"),
    named("darkslategray", "#2F4F4F", "dark slate gray"),
    named("teal", "#008080", "teal"),
];

/// Outcome of checking a learner-supplied color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorCheck {
    Valid {
        key: String,
        color: &'static NamedColor,
    },
    Invalid {
        input: String,
        reason: String,
    },
}

impl ColorCheck {
    /// The value handed to the renderer as fill, valid or not.
    pub fn fill(&self) -> &str {
        match self {
            ColorCheck::Valid { key, .. } => key,
            ColorCheck::Invalid { input, .. } => input,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ColorCheck::Valid { .. })
    }
}

pub fn lookup(key: &str) -> Option<&'static NamedColor> {
    COLORS.iter().find(|c| c.key == key)
}

/// Strip whitespace and look the result up in [`COLORS`].
pub fn check_color(raw: &str) -> ColorCheck {
    let key: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match lookup(&key) {
        Some(color) => ColorCheck::Valid { key, color },
        None => ColorCheck::Invalid {
            reason: format!("Huh? Unrecognized color value: {}", key),
            input: key,
        },
    }
}
