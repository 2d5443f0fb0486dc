use ecommerce_schema::slug::slugify;

#[test]
fn derives_lowercase_hyphenated_slug() {
    assert_eq!(slugify("Men's Shirts", 140), "mens-shirts");
    assert_eq!(slugify("Classic Oxford", 220), "classic-oxford");
}

#[test]
fn collapses_separator_runs() {
    assert_eq!(slugify("  Slim -- Fit   Chinos ", 140), "slim-fit-chinos");
    assert_eq!(slugify("linen_blend shirt", 140), "linen-blend-shirt");
}

#[test]
fn drops_punctuation_without_separating() {
    assert_eq!(slugify("100% Cotton (Blue)", 140), "100-cotton-blue");
    assert_eq!(slugify("Who's who?!", 140), "whos-who");
}

#[test]
fn truncates_to_max_length() {
    assert_eq!(slugify("Summer Collection", 6), "summer");
    // A cut that lands on a separator must not leave a trailing hyphen.
    assert_eq!(slugify("Summer Collection", 7), "summer");
}

#[test]
fn empty_when_nothing_survives() {
    assert_eq!(slugify("", 140), "");
    assert_eq!(slugify("!!!", 140), "");
}
