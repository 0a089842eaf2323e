/// Upper-cases the first character of every space-separated word.
///
/// The rest of each word is left untouched, so "côte d'Ivoire" becomes
/// "Côte D'Ivoire" and "Britain (UK)" is unchanged.
pub fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("united states"), "United States");
        assert_eq!(title_case("Britain (UK)"), "Britain (UK)");
        assert_eq!(title_case("bosnia & herzegovina"), "Bosnia & Herzegovina");
    }

    #[test]
    fn test_title_case_keeps_rest_of_word() {
        assert_eq!(title_case("côte d'Ivoire"), "Côte D'Ivoire");
        assert_eq!(title_case("McDonald islands"), "McDonald Islands");
    }

    #[test]
    fn test_title_case_non_ascii_first_letter() {
        assert_eq!(title_case("åland islands"), "Åland Islands");
    }

    #[test]
    fn test_title_case_empty_and_spacing() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("a  b"), "A  B");
        assert_eq!(title_case(" leading"), " Leading");
    }
}
