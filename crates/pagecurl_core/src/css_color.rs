//! CSS color syntax
//!
//! Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()`,
//! `hsl()`/`hsla()` with comma or space separated arguments and an optional
//! `/ alpha`, the CSS named colors, and `transparent`.
//!
//! RGB channels given as plain numbers are read as `0..=255` when any of them
//! exceeds 1, and as `0..=1` fractions otherwise. Percentages always map to
//! `0..=1`.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{alpha1, char, multispace0, multispace1, one_of},
    combinator::{all_consuming, map_opt, opt, value},
    multi::separated_list1,
    number::complete::float,
    sequence::{delimited, pair},
    IResult,
};

use crate::color::Color;

/// Parse a complete CSS color value, surrounding whitespace allowed
pub(crate) fn parse_css_color(input: &str) -> Option<Color> {
    all_consuming(delimited(
        multispace0,
        alt((hex_color, functional_color, named_color)),
        multispace0,
    ))(input)
    .ok()
    .map(|(_, color)| color)
}

/// A numeric argument of a color function
#[derive(Clone, Copy, Debug, PartialEq)]
enum Component {
    Number(f32),
    Percent(f32),
}

impl Component {
    /// Value as a `0..=1` fraction, reading numbers with `number_scale`
    fn fraction(self, number_scale: f32) -> f32 {
        match self {
            Component::Number(n) => n / number_scale,
            Component::Percent(p) => p / 100.0,
        }
    }
}

fn hex_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = char('#')(input)?;
    map_opt(take_while1(|c: char| c.is_ascii_hexdigit()), hex_digits)(input)
}

fn hex_digits(digits: &str) -> Option<Color> {
    if digits.len() > 8 {
        return None;
    }
    let v = u32::from_str_radix(digits, 16).ok()?;
    let nibble = |shift: u32| ((v >> shift) & 0xF) as u8 * 17;
    let byte = |shift: u32| ((v >> shift) & 0xFF) as u8;

    match digits.len() {
        3 => Some(Color::from_rgba8(nibble(8), nibble(4), nibble(0), 255)),
        4 => Some(Color::from_rgba8(nibble(12), nibble(8), nibble(4), nibble(0))),
        6 => Some(Color::from_rgba8(byte(16), byte(8), byte(0), 255)),
        8 => Some(Color::from_rgba8(byte(24), byte(16), byte(8), byte(0))),
        _ => None,
    }
}

fn component(input: &str) -> IResult<&str, Component> {
    let (input, v) = float(input)?;
    let (input, percent) = opt(char('%'))(input)?;
    // hue may carry an explicit unit
    let (input, _) = opt(tag_no_case("deg"))(input)?;
    let c = if percent.is_some() {
        Component::Percent(v)
    } else {
        Component::Number(v)
    };
    Ok((input, c))
}

/// `,` or `/` with optional whitespace, or bare whitespace
fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, one_of(",/"), multispace0)),
        value((), multispace1),
    ))(input)
}

fn arguments(input: &str) -> IResult<&str, Vec<Component>> {
    delimited(
        pair(char('('), multispace0),
        separated_list1(separator, component),
        pair(multispace0, char(')')),
    )(input)
}

fn functional_color(input: &str) -> IResult<&str, Color> {
    let (input, name) = alt((
        tag_no_case("rgba"),
        tag_no_case("rgb"),
        tag_no_case("hsla"),
        tag_no_case("hsl"),
    ))(input)?;
    let (input, _) = multispace0(input)?;
    let is_rgb = name.len() >= 3 && name[..3].eq_ignore_ascii_case("rgb");
    map_opt(arguments, move |args| {
        if is_rgb {
            rgb_from(&args)
        } else {
            hsl_from(&args)
        }
    })(input)
}

fn alpha_from(args: &[Component]) -> Option<f32> {
    match args {
        [_, _, _] => Some(1.0),
        [_, _, _, a] => Some(a.fraction(1.0).clamp(0.0, 1.0)),
        _ => None,
    }
}

fn rgb_from(args: &[Component]) -> Option<Color> {
    let alpha = alpha_from(args)?;
    let channels = &args[..3];
    let byte_range = channels
        .iter()
        .any(|c| matches!(c, Component::Number(n) if *n > 1.0));
    let scale = if byte_range { 255.0 } else { 1.0 };
    let ch = |i: usize| channels[i].fraction(scale).clamp(0.0, 1.0);
    Some(Color::rgba(ch(0), ch(1), ch(2), alpha))
}

fn hsl_from(args: &[Component]) -> Option<Color> {
    let alpha = alpha_from(args)?;
    let hue = match args[0] {
        Component::Number(deg) => deg.rem_euclid(360.0) / 360.0,
        Component::Percent(_) => return None,
    };
    // saturation and lightness are percentages with or without the `%`
    let s = args[1].fraction(100.0).clamp(0.0, 1.0);
    let l = args[2].fraction(100.0).clamp(0.0, 1.0);

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    Some(Color::rgba(
        channel(hue + 1.0 / 3.0),
        channel(hue),
        channel(hue - 1.0 / 3.0),
        alpha,
    ))
}

fn named_color(input: &str) -> IResult<&str, Color> {
    map_opt(alpha1, lookup_named)(input)
}

fn lookup_named(name: &str) -> Option<Color> {
    let name = name.to_ascii_lowercase();
    if name == "transparent" {
        return Some(Color::TRANSPARENT);
    }
    NAMED_COLORS
        .binary_search_by(|(n, _)| n.cmp(&name.as_str()))
        .ok()
        .map(|i| {
            let rgb = NAMED_COLORS[i].1;
            Color::from_rgba8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
        })
}

/// CSS named colors, sorted by name
static NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];
