//! # Record Codec
//!
//! Text encoding and decoding of [`GroceryItem`] records.
//!
//! ## Record Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "00072250018548","Nature's Own","Honey \"Wheat\"",2.99                 │
//! │   └──── code ────┘ └── brand ──┘ └───── name ─────┘ └price┘             │
//! │                                                                         │
//! │  • Text fields are wrapped in double quotes                            │
//! │  • Inside quotes, `\"` is a quote and `\\` is a backslash              │
//! │  • Commas inside quotes need no escaping                               │
//! │  • Whitespace before any field or delimiter is skipped                 │
//! │  • Records are separated by whitespace (one per line when written)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//! [`ItemReader`] carries a sticky failed flag. The first record that does not
//! parse sets it, and every later read returns [`DecodeError::StreamFailed`]
//! until [`ItemReader::clear_failure`] is called. Decoding into an existing
//! item only assigns once all four fields parsed.
//!
//! ## Usage
//! ```rust
//! use grocery_core::{GroceryItem, ItemReader};
//!
//! let mut reader = ItemReader::new(r#""012345","Acme","Widget",3.5"#);
//! let item = GroceryItem::decode_from(&mut reader).unwrap();
//! assert_eq!(item.name(), "Widget");
//!
//! // Callers choose the price format
//! assert_eq!(format!("{:.2}", item), r#""012345","Acme","Widget",3.50"#);
//! ```

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::error::{DecodeError, DecodeResult};
use crate::item::GroceryItem;

/// Separator between the four fields of a record.
pub const DELIMITER: char = ',';

const QUOTE: char = '"';
const ESCAPE: char = '\\';

// =============================================================================
// Item Reader
// =============================================================================

/// Cursor over record text.
///
/// Reads records one after another; also usable as an iterator that stops at
/// the first record that fails to decode.
#[derive(Debug, Clone)]
pub struct ItemReader<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> ItemReader<'a> {
    pub fn new(input: &'a str) -> Self {
        ItemReader {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// True once a decode has failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Resets the failed flag. Input consumed by the failed decode stays consumed.
    pub fn clear_failure(&mut self) {
        self.failed = false;
    }

    /// Unread input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Decodes the next record.
    ///
    /// On error the reader is marked failed.
    pub fn read_item(&mut self) -> DecodeResult<GroceryItem> {
        if self.failed {
            return Err(DecodeError::StreamFailed);
        }

        let result = self.read_fields();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn read_fields(&mut self) -> DecodeResult<GroceryItem> {
        let code = self.read_quoted("code")?;
        self.expect_delimiter("code")?;
        let brand = self.read_quoted("brand")?;
        self.expect_delimiter("brand")?;
        let name = self.read_quoted("name")?;
        self.expect_delimiter("name")?;
        let price = self.read_price()?;

        Ok(GroceryItem::new(code, brand, name, price))
    }

    // =========================================================================
    // Primitive Readers
    // =========================================================================

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn read_quoted(&mut self, field: &'static str) -> DecodeResult<String> {
        self.skip_whitespace();
        match self.bump() {
            Some(QUOTE) => {}
            Some(found) => return Err(DecodeError::MissingQuote { field, found }),
            None => return Err(DecodeError::UnexpectedEnd { field }),
        }

        let mut value = String::new();
        loop {
            match self.bump() {
                Some(QUOTE) => return Ok(value),
                Some(ESCAPE) => match self.bump() {
                    Some(c) => value.push(c),
                    None => return Err(DecodeError::UnterminatedQuote { field }),
                },
                Some(c) => value.push(c),
                None => return Err(DecodeError::UnterminatedQuote { field }),
            }
        }
    }

    fn expect_delimiter(&mut self, after: &'static str) -> DecodeResult<()> {
        self.skip_whitespace();
        match self.bump() {
            Some(DELIMITER) => Ok(()),
            Some(found) => Err(DecodeError::BadDelimiter { after, found }),
            None => Err(DecodeError::UnexpectedEnd { field: "delimiter" }),
        }
    }

    /// Reads the longest prefix that looks like a floating point number.
    fn read_price(&mut self) -> DecodeResult<f64> {
        self.skip_whitespace();
        let rest = self.remaining();
        let len = numeric_prefix_len(rest);

        if len == 0 {
            return match rest.chars().next() {
                None => Err(DecodeError::UnexpectedEnd { field: "price" }),
                Some(c) => Err(DecodeError::InvalidPrice(c.to_string())),
            };
        }

        let text = &rest[..len];
        let price = text
            .parse::<f64>()
            .map_err(|_| DecodeError::InvalidPrice(text.to_string()))?;
        self.pos += len;
        Ok(price)
    }
}

impl Iterator for ItemReader<'_> {
    type Item = GroceryItem;

    fn next(&mut self) -> Option<GroceryItem> {
        self.read_item().ok()
    }
}

/// Byte length of `[+-]digits[.digits][(e|E)[+-]digits]`, or of a
/// `[+-]word` run so `inf` and `NaN` reach `f64::from_str`.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if bytes.get(i).is_some_and(u8::is_ascii_alphabetic) {
        while bytes.get(i).is_some_and(u8::is_ascii_alphabetic) {
            i += 1;
        }
        return i;
    }

    let digits_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }
    if i == digits_start || (i == digits_start + 1 && bytes[digits_start] == b'.') {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            while bytes.get(j).is_some_and(u8::is_ascii_digit) {
                j += 1;
            }
            i = j;
        }
    }

    i
}

// =============================================================================
// Decoding
// =============================================================================

impl GroceryItem {
    /// Decodes one record from the reader.
    pub fn decode_from(reader: &mut ItemReader<'_>) -> DecodeResult<GroceryItem> {
        reader.read_item()
    }

    /// Decodes one record into `self`.
    ///
    /// All-or-nothing: on error `self` is untouched and the reader is failed.
    pub fn decode_into(&mut self, reader: &mut ItemReader<'_>) -> DecodeResult<()> {
        *self = reader.read_item()?;
        Ok(())
    }
}

impl FromStr for GroceryItem {
    type Err = DecodeError;

    /// Parses exactly one record; anything but whitespace after it is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = ItemReader::new(s);
        let item = reader.read_item()?;
        let rest = reader.remaining().trim();
        if !rest.is_empty() {
            return Err(DecodeError::TrailingInput(rest.to_string()));
        }
        Ok(item)
    }
}

// =============================================================================
// Encoding
// =============================================================================

fn write_quoted<W: fmt::Write>(w: &mut W, value: &str) -> fmt::Result {
    w.write_char(QUOTE)?;
    for c in value.chars() {
        if c == QUOTE || c == ESCAPE {
            w.write_char(ESCAPE)?;
        }
        w.write_char(c)?;
    }
    w.write_char(QUOTE)
}

impl GroceryItem {
    fn encode_with<W: fmt::Write>(&self, w: &mut W, precision: Option<usize>) -> fmt::Result {
        write_quoted(w, self.code())?;
        w.write_char(DELIMITER)?;
        write_quoted(w, self.brand())?;
        w.write_char(DELIMITER)?;
        write_quoted(w, self.name())?;
        w.write_char(DELIMITER)?;
        match precision {
            Some(p) => write!(w, "{:.*}", p, self.price()),
            None => write!(w, "{}", self.price()),
        }
    }

    /// Encodes the record with the shortest price text that reads back exactly.
    pub fn encode_to<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        self.encode_with(w, None)
    }

    /// Writes the record to a byte sink, without a trailing separator.
    pub fn write_to<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

/// Encodes the record; `{:.N}` fixes the price to N decimals.
impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        self.encode_with(f, precision)
    }
}

/// Writes items one per line in the persisted file format.
pub fn write_records<'a, W, I>(w: &mut W, items: I) -> io::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a GroceryItem>,
{
    for item in items {
        item.write_to(w)?;
        writeln!(w)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> GroceryItem {
        GroceryItem::new("012345", "Acme", "Widget", 3.5)
    }

    #[test]
    fn test_decode_basic_record() {
        let item: GroceryItem = r#""012345","Acme","Widget",3.5"#.parse().unwrap();
        assert_eq!(item.code(), "012345");
        assert_eq!(item.brand(), "Acme");
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.price(), 3.5);
    }

    #[test]
    fn test_decode_skips_whitespace_before_fields_and_delimiters() {
        let text = "  \"012345\" ,\t\"Acme\"\n , \"Widget\"  ,   3.5";
        assert_eq!(text.parse::<GroceryItem>().unwrap(), widget());
    }

    #[test]
    fn test_decode_escapes() {
        let text = r#""1","Joe's \"Best\"","back\\slash, comma",0.99"#;
        let item: GroceryItem = text.parse().unwrap();
        assert_eq!(item.brand(), r#"Joe's "Best""#);
        assert_eq!(item.name(), r"back\slash, comma");
    }

    #[test]
    fn test_decode_empty_text_fields() {
        let item: GroceryItem = r#""","","",0"#.parse().unwrap();
        assert_eq!(item, GroceryItem::default());
    }

    #[test]
    fn test_decode_price_forms() {
        for (text, expected) in [
            ("3", 3.0),
            ("-2.25", -2.25),
            ("+.5", 0.5),
            ("4.", 4.0),
            ("1.5e2", 150.0),
            ("7E-1", 0.7),
        ] {
            let record = format!(r#""c","b","n",{text}"#);
            let item: GroceryItem = record.parse().unwrap();
            assert_eq!(item.price(), expected, "price text {text}");
        }
    }

    #[test]
    fn test_price_stops_at_non_numeric() {
        let mut reader = ItemReader::new(r#""c","b","n",2.5e"next""#);
        let item = reader.read_item().unwrap();
        assert_eq!(item.price(), 2.5);
        assert_eq!(reader.remaining(), r#"e"next""#);
    }

    #[test]
    fn test_missing_third_delimiter_leaves_target_intact() {
        let mut target = GroceryItem::new("old", "Old Brand", "Old Name", 1.0);
        let mut reader = ItemReader::new(r#""012345","Acme","Widget" 3.5"#);

        let err = target.decode_into(&mut reader).unwrap_err();
        assert_eq!(
            err,
            DecodeError::BadDelimiter {
                after: "name",
                found: '3'
            }
        );
        assert!(reader.is_failed());
        assert_eq!(target, GroceryItem::new("old", "Old Brand", "Old Name", 1.0));
    }

    #[test]
    fn test_decode_into_replaces_all_fields() {
        let mut target = GroceryItem::new("old", "Old Brand", "Old Name", 1.0);
        let mut reader = ItemReader::new(r#""012345","Acme","Widget",3.5"#);
        target.decode_into(&mut reader).unwrap();
        assert_eq!(target, widget());
        assert!(!reader.is_failed());
    }

    #[test]
    fn test_wrong_delimiter_character() {
        let err = r#""1";"b","n",1"#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(
            err,
            DecodeError::BadDelimiter {
                after: "code",
                found: ';'
            }
        );
    }

    #[test]
    fn test_missing_opening_quote() {
        let err = r#"012345,"Acme","Widget",3.5"#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingQuote {
                field: "code",
                found: '0'
            }
        );
    }

    #[test]
    fn test_unterminated_quote() {
        let err = r#""012345","Acme","Widget"#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(err, DecodeError::UnterminatedQuote { field: "name" });

        let err = r#""012345","Acme","Wid\"#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(err, DecodeError::UnterminatedQuote { field: "name" });
    }

    #[test]
    fn test_invalid_and_missing_price() {
        let err = r#""1","b","n",abc"#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(err, DecodeError::InvalidPrice("abc".to_string()));

        let err = r#""1","b","n",  "#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedEnd { field: "price" });

        let err = r#""1","b","n",."#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(err, DecodeError::InvalidPrice(".".to_string()));
    }

    #[test]
    fn test_empty_input_is_end_of_input() {
        let err = "   \n".parse::<GroceryItem>().unwrap_err();
        assert!(err.is_end_of_input());
    }

    #[test]
    fn test_failed_reader_is_sticky() {
        let mut reader = ItemReader::new("bad\n\"1\",\"b\",\"n\",1");
        assert!(reader.read_item().is_err());
        assert_eq!(reader.read_item().unwrap_err(), DecodeError::StreamFailed);

        reader.clear_failure();
        assert!(!reader.is_failed());
    }

    #[test]
    fn test_reader_iterates_until_failure() {
        let text = concat!(
            "\"1\",\"a\",\"x\",1.0\n",
            "\"2\",\"b\",\"y\",2.0\n",
            "\"3\",\"c\",\"z\" 3.0\n",
            "\"4\",\"d\",\"w\",4.0\n",
        );
        let codes: Vec<String> = ItemReader::new(text).map(|i| i.code().to_string()).collect();
        assert_eq!(codes, vec!["1", "2"]);
    }

    #[test]
    fn test_encode_escapes_quotes_and_backslashes() {
        let item = GroceryItem::new("1", r#"Joe's "Best""#, r"a\b, c", 0.5);
        let mut out = String::new();
        item.encode_to(&mut out).unwrap();
        assert_eq!(out, r#""1","Joe's \"Best\"","a\\b, c",0.5"#);
    }

    #[test]
    fn test_display_honours_precision() {
        assert_eq!(widget().to_string(), r#""012345","Acme","Widget",3.5"#);
        assert_eq!(format!("{:.2}", widget()), r#""012345","Acme","Widget",3.50"#);
    }

    #[test]
    fn test_round_trip() {
        let items = [
            widget(),
            GroceryItem::new("", "", "", 0.0),
            GroceryItem::new("00072250018548", "Nature's Own", "Honey \"Wheat\"", 2.99),
            GroceryItem::new("x", r"C:\path\", "a, b, c", -12.125),
            GroceryItem::new("y", "Ünïcödé", "café ☕", 1e-7),
            GroceryItem::new("z", "big", "number", 123456789.0123),
        ];
        for item in &items {
            let decoded: GroceryItem = item.to_string().parse().unwrap();
            assert_eq!(&decoded, item);
        }
    }

    #[test]
    fn test_non_finite_round_trip() {
        let item = GroceryItem::new("i", "b", "n", f64::INFINITY);
        let decoded: GroceryItem = item.to_string().parse().unwrap();
        assert_eq!(decoded.price(), f64::INFINITY);
        assert_eq!(decoded, item);

        let item = GroceryItem::new("m", "b", "n", f64::NEG_INFINITY);
        let decoded: GroceryItem = item.to_string().parse().unwrap();
        assert_eq!(decoded, item);

        let item = GroceryItem::new("n", "b", "n", f64::NAN);
        let decoded: GroceryItem = item.to_string().parse().unwrap();
        assert!(decoded.price().is_nan());
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_from_str_rejects_trailing_input() {
        let err = r#""1","b","n",2.5 garbage"#.parse::<GroceryItem>().unwrap_err();
        assert_eq!(err, DecodeError::TrailingInput("garbage".to_string()));

        // Trailing whitespace (a record separator) is fine
        let item: GroceryItem = "\"1\",\"b\",\"n\",2.5 \r\n".parse().unwrap();
        assert_eq!(item.price(), 2.5);
    }

    #[test]
    fn test_write_records_then_read_back() {
        let items = vec![
            GroceryItem::new("1", "a", "x", 1.0),
            GroceryItem::new("2", "b", "y", 2.5),
        ];
        let mut buf = Vec::new();
        write_records(&mut buf, &items).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\"1\",\"a\",\"x\",1\n\"2\",\"b\",\"y\",2.5\n");

        let decoded: Vec<GroceryItem> = ItemReader::new(&text).collect();
        assert_eq!(decoded, items);
    }
}
