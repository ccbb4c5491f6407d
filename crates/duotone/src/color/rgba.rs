//! Parsed colors and filter transfer tables.

use cssparser::{
    hsl_to_rgb, match_ignore_ascii_case, parse_color_keyword, Color, ParseError, ParseErrorKind,
    Parser, ParserInput, Token,
};

use super::error::ColorParseError;

/// An sRGB color with alpha.
///
/// Channels are integers in `0..=255`; alpha is in `0.0..=1.0`, rounded to
/// three decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: round_alpha(alpha),
        }
    }

    pub fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Parses a CSS color.
    ///
    /// Accepts hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`),
    /// `rgb()`/`rgba()` and `hsl()`/`hsla()` in comma or space syntax, and
    /// the CSS named colors including `transparent`.
    ///
    /// ```rust
    /// use duotone::Rgba;
    ///
    /// assert_eq!(Rgba::parse("#f00").unwrap(), Rgba::opaque(255, 0, 0));
    /// assert_eq!(Rgba::parse("rgb(0 128 255 / 50%)").unwrap(), Rgba::new(0, 128, 255, 0.5));
    /// assert_eq!(Rgba::parse("hsl(0, 100%, 50%)").unwrap(), Rgba::opaque(255, 0, 0));
    /// assert_eq!(Rgba::parse("rebeccapurple").unwrap(), Rgba::opaque(102, 51, 153));
    /// assert!(Rgba::parse("not-a-color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        if input.trim().is_empty() {
            return Err(ColorParseError::Empty);
        }

        let mut parser_input = ParserInput::new(input);
        let mut parser = Parser::new(&mut parser_input);
        let syntax = || ColorParseError::Syntax {
            input: input.to_string(),
        };

        let color = parse_color(&mut parser).map_err(|err| match err.kind {
            ParseErrorKind::Custom(err) => err,
            ParseErrorKind::Basic(_) => syntax(),
        })?;
        parser.expect_exhausted().map_err(|_| syntax())?;
        Ok(color)
    }

    /// Perceived brightness in `0.0..=1.0`.
    pub fn brightness(&self) -> f64 {
        let weighted =
            self.red as f64 * 299.0 + self.green as f64 * 587.0 + self.blue as f64 * 114.0;
        weighted / 1000.0 / 255.0
    }
}

fn round_alpha(alpha: f64) -> f64 {
    (alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

type ColorResult<'i, T> = Result<T, ParseError<'i, ColorParseError>>;

fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, Rgba> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match token {
        Token::Hash(ref value) | Token::IDHash(ref value) => from_hex(value).ok_or_else(|| {
            location.new_custom_error(ColorParseError::InvalidHex {
                value: value.to_string(),
            })
        }),
        Token::Ident(ref name) => named_color(name).ok_or_else(|| {
            location.new_custom_error(ColorParseError::UnknownName {
                name: name.to_string(),
            })
        }),
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|args| parse_rgb_arguments(args))
        }
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") =>
        {
            parser.parse_nested_block(|args| parse_hsl_arguments(args))
        }
        _ => Err(location.new_unexpected_token_error(token)),
    }
}

fn parse_rgb_arguments<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, Rgba> {
    let red = parse_channel(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let green = parse_channel(parser)?;
    if legacy {
        parser.expect_comma()?;
    }
    let blue = parse_channel(parser)?;

    let has_alpha = if legacy {
        parser.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        parser.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    let alpha = if has_alpha { parse_alpha(parser)? } else { 1.0 };

    Ok(Rgba::new(red, green, blue, alpha))
}

fn parse_hsl_arguments<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, Rgba> {
    let hue = parse_hue(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let saturation = parse_fraction(parser)?;
    if legacy {
        parser.expect_comma()?;
    }
    let lightness = parse_fraction(parser)?;

    let has_alpha = if legacy {
        parser.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        parser.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    let alpha = if has_alpha { parse_alpha(parser)? } else { 1.0 };

    let turns = (hue - 360.0 * (hue / 360.0).floor()) / 360.0;
    let (red, green, blue) = hsl_to_rgb(
        turns as f32,
        saturation.clamp(0.0, 1.0) as f32,
        lightness.clamp(0.0, 1.0) as f32,
    );
    let channel = |value: f32| (value as f64 * 255.0).round().clamp(0.0, 255.0) as u8;
    Ok(Rgba::new(channel(red), channel(green), channel(blue), alpha))
}

/// Hue in degrees, from a plain number or an angle.
fn parse_hue<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, f64> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value as f64),
        Token::Dimension {
            value, ref unit, ..
        } => {
            let value = value as f64;
            match_ignore_ascii_case! { unit,
                "deg" => Ok(value),
                "grad" => Ok(value * 360.0 / 400.0),
                "rad" => Ok(value.to_degrees()),
                "turn" => Ok(value * 360.0),
                _ => Err(location.new_unexpected_token_error(token.clone())),
            }
        }
        _ => Err(location.new_unexpected_token_error(token)),
    }
}

/// Saturation or lightness as a fraction. Bare numbers count as percents.
fn parse_fraction<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, f64> {
    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Percentage { unit_value, .. } => Ok(unit_value as f64),
        Token::Number { value, .. } => Ok(value as f64 / 100.0),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, u8> {
    let location = parser.current_source_location();
    let value = match *parser.next()? {
        Token::Number { value, .. } => value as f64,
        Token::Percentage { unit_value, .. } => unit_value as f64 * 255.0,
        ref token => return Err(location.new_unexpected_token_error(token.clone())),
    };
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, f64> {
    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Number { value, .. } => Ok(value as f64),
        Token::Percentage { unit_value, .. } => Ok(unit_value as f64),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn from_hex(value: &str) -> Option<Rgba> {
    if !value.is_ascii() {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&value[i..=i], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&value[i..i + 2], 16).ok();

    match value.len() {
        3 | 4 => {
            let channels = (0..value.len())
                .map(|i| digit(i).map(|d| d * 17))
                .collect::<Option<Vec<u8>>>()?;
            let alpha = channels.get(3).map_or(1.0, |a| *a as f64 / 255.0);
            Some(Rgba::new(channels[0], channels[1], channels[2], alpha))
        }
        6 | 8 => {
            let channels = (0..value.len() / 2)
                .map(|i| pair(i * 2))
                .collect::<Option<Vec<u8>>>()?;
            let alpha = channels.get(3).map_or(1.0, |a| *a as f64 / 255.0);
            Some(Rgba::new(channels[0], channels[1], channels[2], alpha))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Rgba> {
    match parse_color_keyword::<Color>(name) {
        Ok(Color::Rgba(rgba)) => Some(Rgba::new(
            rgba.red.unwrap_or(0),
            rgba.green.unwrap_or(0),
            rgba.blue.unwrap_or(0),
            rgba.alpha.map_or(1.0, f64::from),
        )),
        _ => None,
    }
}

/// Transfer table values for the red, green, blue and alpha channels.
///
/// Entry `i` of each table comes from color `i`; color channels are scaled
/// to `0.0..=1.0`. A color that fails to parse contributes opaque black so
/// the colors after it keep their positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelTables {
    pub red: Vec<f64>,
    pub green: Vec<f64>,
    pub blue: Vec<f64>,
    pub alpha: Vec<f64>,
}

impl ChannelTables {
    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Self {
        let mut tables = Self::default();
        for color in colors {
            let color = color.as_ref();
            let rgba = Rgba::parse(color).unwrap_or_else(|err| {
                tracing::warn!(color, error = %err, "unparseable duotone color, using black");
                Rgba::opaque(0, 0, 0)
            });
            tables.push(rgba);
        }
        tables
    }

    fn push(&mut self, rgba: Rgba) {
        self.red.push(rgba.red as f64 / 255.0);
        self.green.push(rgba.green as f64 / 255.0);
        self.blue.push(rgba.blue as f64 / 255.0);
        self.alpha.push(rgba.alpha);
    }

    pub fn len(&self) -> usize {
        self.red.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    /// Formats a table as the space separated `tableValues` attribute.
    pub fn format(values: &[f64]) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Rgba::parse("#000").unwrap(), Rgba::opaque(0, 0, 0));
        assert_eq!(Rgba::parse("#fFf").unwrap(), Rgba::opaque(255, 255, 255));
        assert_eq!(Rgba::parse("#8000").unwrap(), Rgba::new(136, 0, 0, 0.0));
        assert_eq!(Rgba::parse("#00a5ff").unwrap(), Rgba::opaque(0, 165, 255));
        assert_eq!(
            Rgba::parse("#ff000080").unwrap(),
            Rgba::new(255, 0, 0, 128.0 / 255.0)
        );
    }

    #[test]
    fn test_parse_invalid_hex() {
        assert_eq!(
            Rgba::parse("#12345"),
            Err(ColorParseError::InvalidHex {
                value: "12345".to_string()
            })
        );
        assert!(matches!(
            Rgba::parse("#ggg"),
            Err(ColorParseError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_parse_rgb_functions() {
        assert_eq!(
            Rgba::parse("rgb(255, 128, 0)").unwrap(),
            Rgba::opaque(255, 128, 0)
        );
        assert_eq!(
            Rgba::parse("rgba(0, 0, 0, 0.25)").unwrap(),
            Rgba::new(0, 0, 0, 0.25)
        );
        assert_eq!(
            Rgba::parse("RGB(100% 0% 50%)").unwrap(),
            Rgba::opaque(255, 0, 128)
        );
        assert_eq!(
            Rgba::parse("rgb(300 -5 0 / 20%)").unwrap(),
            Rgba::new(255, 0, 0, 0.2)
        );
    }

    #[test]
    fn test_parse_hsl_functions() {
        assert_eq!(
            Rgba::parse("hsl(0, 100%, 50%)").unwrap(),
            Rgba::opaque(255, 0, 0)
        );
        assert_eq!(
            Rgba::parse("hsl(120 100% 25%)").unwrap(),
            Rgba::opaque(0, 128, 0)
        );
        assert_eq!(
            Rgba::parse("hsla(240deg, 100%, 50%, 0.5)").unwrap(),
            Rgba::new(0, 0, 255, 0.5)
        );
        assert_eq!(
            Rgba::parse("HSL(-0.5turn 100% 50% / 25%)").unwrap(),
            Rgba::new(0, 255, 255, 0.25)
        );
        assert_eq!(
            Rgba::parse("hsl(0, 0%, 100%)").unwrap(),
            Rgba::opaque(255, 255, 255)
        );
        assert!(matches!(
            Rgba::parse("hsl(0, 100%)"),
            Err(ColorParseError::Syntax { .. })
        ));
        assert!(matches!(
            Rgba::parse("hsl(10px, 100%, 50%)"),
            Err(ColorParseError::Syntax { .. })
        ));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Rgba::parse("Orange").unwrap(), Rgba::opaque(255, 165, 0));
        assert_eq!(
            Rgba::parse("rebeccapurple").unwrap(),
            Rgba::opaque(102, 51, 153)
        );
        assert_eq!(
            Rgba::parse("LightGoldenRodYellow").unwrap(),
            Rgba::opaque(250, 250, 210)
        );
        assert_eq!(Rgba::parse("transparent").unwrap().alpha, 0.0);
        assert!(matches!(
            Rgba::parse("currentcolor"),
            Err(ColorParseError::UnknownName { .. })
        ));
        assert_eq!(
            Rgba::parse("blurple"),
            Err(ColorParseError::UnknownName {
                name: "blurple".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgba::parse("  "), Err(ColorParseError::Empty));
        assert!(matches!(
            Rgba::parse("#fff #000"),
            Err(ColorParseError::Syntax { .. })
        ));
        assert!(matches!(
            Rgba::parse("rgb(1, 2)"),
            Err(ColorParseError::Syntax { .. })
        ));
        assert!(matches!(
            Rgba::parse("hwb(0 0% 0%)"),
            Err(ColorParseError::Syntax { .. })
        ));
    }

    #[test]
    fn test_brightness() {
        assert_eq!(Rgba::opaque(0, 0, 0).brightness(), 0.0);
        assert_eq!(Rgba::opaque(255, 255, 255).brightness(), 1.0);
        assert!((Rgba::opaque(255, 0, 0).brightness() - 0.299).abs() < 1e-9);
        let mid = Rgba::opaque(128, 128, 128).brightness();
        assert!(mid > Rgba::opaque(127, 127, 127).brightness());
    }

    #[test]
    fn test_channel_tables() {
        let tables = ChannelTables::from_colors(&["#000000", "#ff8000"]);
        assert_eq!(tables.red, vec![0.0, 1.0]);
        assert_eq!(tables.green, vec![0.0, 128.0 / 255.0]);
        assert_eq!(tables.blue, vec![0.0, 0.0]);
        assert_eq!(tables.alpha, vec![1.0, 1.0]);
        assert_eq!(ChannelTables::format(&tables.red), "0 1");
        assert_eq!(
            ChannelTables::format(&tables.green),
            "0 0.5019607843137255"
        );
    }

    #[test]
    fn test_channel_tables_keep_positions_for_invalid_colors() {
        let tables = ChannelTables::from_colors(&["#fff", "nope", "#00f"]);
        assert_eq!(tables.len(), 3);
        assert_eq!(tables.red, vec![1.0, 0.0, 0.0]);
        assert_eq!(tables.blue, vec![1.0, 0.0, 1.0]);
        assert_eq!(tables.alpha, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_channel_tables_hsl_in_the_middle() {
        let tables = ChannelTables::from_colors(&["#000", "hsl(0, 100%, 50%)", "#fff"]);
        assert_eq!(tables.red, vec![0.0, 1.0, 1.0]);
        assert_eq!(tables.green, vec![0.0, 0.0, 1.0]);
    }
}
