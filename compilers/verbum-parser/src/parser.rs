use nom::{
    bytes::complete::take_while,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::delimited,
    IResult,
};
use crate::token::{Field, Span};

fn raw_field(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c != ',')(input)
}

fn raw_fields(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char(','), raw_field)(input)
}

/// Splits `original_input` on commas, trimming each entry.
///
/// Empty entries are kept, so `"a,,b"` yields three fields and `""` yields one.
pub fn split_fields(original_input: &str) -> Vec<Field<'_>> {
    // A field never contains ',', so the list parser always consumes the whole input.
    let raw = match raw_fields(original_input) {
        Ok((_, raw)) => raw,
        Err(_) => vec![original_input],
    };

    raw.into_iter()
        .map(|raw| {
            let text = raw.trim();
            // `text` is a sub-slice of `original_input`; recover its offset
            let start = text.as_ptr() as usize - original_input.as_ptr() as usize;
            Field { span: Span::new(start, start + text.len()), text }
        })
        .collect()
}

/// Parses a bare decimal number with optional surrounding whitespace.
pub fn parse_number(input: &str) -> Option<u32> {
    let parsed: IResult<&str, u32> = all_consuming(delimited(
        multispace0,
        map_res(digit1, str::parse::<u32>),
        multispace0,
    ))(input);

    parsed.ok().map(|(_, n)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_trims_and_spans() {
        let input = "amo,  amare ,amavi";
        let fields = split_fields(input);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].text, "amare");
        assert_eq!(&input[fields[1].span.start..fields[1].span.end], "amare");
        assert_eq!(fields[2].span, Span::new(13, 18));
    }

    #[test]
    fn test_split_fields_keeps_empty_entries() {
        let fields: Vec<&str> = split_fields("a,, b,").iter().map(|f| f.text).collect();
        assert_eq!(fields, vec!["a", "", "b", ""]);

        assert_eq!(split_fields("").len(), 1);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3"), Some(3));
        assert_eq!(parse_number(" 12 "), Some(12));
        assert_eq!(parse_number("1st"), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("99999999999"), None);
    }
}
