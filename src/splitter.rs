use lazy_static::lazy_static;
use regex::Regex;

use crate::error::LengthError;

/// Breaks the user's inputs into individual terms.
///
/// A single input is split on `+` and `,`, so `2.5 + 3.5` is two terms.
/// Several inputs are taken as one term each, whatever they contain. Blank
/// terms are dropped in both cases; if nothing is left there is no input.
pub fn split_terms(inputs: &[impl AsRef<str>]) -> Result<Vec<String>, LengthError> {
    lazy_static! {
        static ref REGEX_DELIMITER: Regex = Regex::new(r"\s*[+,]\s*").unwrap();
    }

    let terms = match inputs {
        [input] =>
            REGEX_DELIMITER.split(input.as_ref())
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect::<Vec<String>>(),
        _ =>
            inputs.iter()
            .map(|input| input.as_ref().trim())
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect::<Vec<String>>(),
    };

    if terms.is_empty() {
        return Err(LengthError::NoInput);
    }

    Ok(terms)
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    // Tests splitting of inputs.
    #[rstest]
    #[case(vec!["2.5", "3.5"]                 , vec!["2.5 + 3.5"])]
    #[case(vec!["2.5", "3.5"]                 , vec!["2.5", "3.5"])]
    #[case(vec!["2.5", "3.5"]                 , vec!["2.5,3.5"])]
    #[case(vec!["2.5", "3.5", "4"]            , vec!["2.5 + 3.5, 4"])]
    #[case(vec!["2 1/2\"", "5.535\"", "9mm"]  , vec!["2 1/2\" + 5.535\" + 9mm"])]
    #[case(vec!["5' 3\"", "2.5"]              , vec!["5' 3\"", "2.5"])]
    #[case(vec!["5' 3 1/2\""]                 , vec!["5' 3 1/2\""])]
    #[case(vec!["2.5"]                        , vec!["  2.5  "])]
    #[case(vec!["2.5", "3.5"]                 , vec!["2.5 + 3.5 +"])]
    #[case(vec!["2.5", "3.5"]                 , vec!["+ 2.5 ++ 3.5"])]
    #[case(vec!["2.5", "3.5"]                 , vec!["2.5", "", "  ", "3.5"])]
    #[case(vec!["2 + 3", "4"]                 , vec!["2 + 3", "4"])]
    #[trace]
    fn test_split(#[case] expected: Vec<&str>, #[case] inputs: Vec<&str>) {
        assert_eq!(split_terms(&inputs), Ok(expected.into_iter().map(str::to_string).collect()));
    }

    // Tests that blank inputs are no input.
    #[rstest]
    #[case(vec![])]
    #[case(vec![""])]
    #[case(vec!["   "])]
    #[case(vec![" + , "])]
    #[case(vec!["", " "])]
    #[trace]
    fn test_no_input(#[case] inputs: Vec<&str>) {
        assert_eq!(split_terms(&inputs), Err(LengthError::NoInput));
    }
}
