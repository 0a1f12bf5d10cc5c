use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Rewrites a term into the plain characters the extractor reads.
///
/// Compatibility characters are folded with NFKC, so fullwidth digits and
/// letters, superscripts and vulgar fractions all read as their ASCII
/// counterparts. A handful of typographic marks are then canonicalized by
/// hand.
pub fn normalize(term: &str) -> String {
    lazy_static! {
        static ref REGEX_VULGAR: Regex = Regex::new(
            r"(\d)([\u{00BC}-\u{00BE}\u{2150}-\u{215E}])"
        ).unwrap();
    }

    // `2½` decomposes to `21⁄2`; keep it a mixed number.
    let term = REGEX_VULGAR.replace_all(term, "$1 $2");

    let term = term.nfkc().collect::<String>();

    // NFKC expands the double prime into two primes.
    let term = term.replace("\u{2032}\u{2032}", "\u{2033}");

    let term = term.replace('\u{201C}', "\""); // `“`, left double quotation mark.
    let term = term.replace('\u{201D}', "\""); // `”`, right double quotation mark.
    let term = term.replace('\u{2018}', "'"); // `‘`, left single quotation mark.
    let term = term.replace('\u{2019}', "'"); // `’`, right single quotation mark.
    let term = term.replace('\u{2212}', "-"); // `−`, minus sign.
    let term = term.replace('\u{2044}', "/"); // `⁄`, fraction slash.
    let term = term.replace('\u{2215}', "/"); // `∕`, division slash.

    term
}



#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("9mm"         , "9mm")]
    #[case("2 1/2\""     , "2 1/2\"")]
    #[case("5\u{2033}"   , "5\u{2033}")]
    #[case("5\u{2032}"   , "5\u{2032}")]
    #[case("2\u{00BD}\"" , "2 1/2\"")]
    #[case("\u{00BE}in"  , "3/4in")]
    #[case("3\u{215B}"   , "3 1/8")]
    #[case("5\u{201D}"   , "5\"")]
    #[case("5\u{2019}"   , "5'")]
    #[case("\u{2212}3"   , "-3")]
    #[case("1\u{2044}2"  , "1/2")]
    #[case("1\u{2215}2"  , "1/2")]
    #[case("\u{FF19}\u{FF4D}\u{FF4D}", "9mm")]
    #[trace]
    fn test_normalize(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(normalize(term), expected);
    }
}
