// Prompt builder tests
// Author: kelexine (https://github.com/kelexine)

use proptest::prelude::*;
use regex::Regex;
use shot2test::prompt::build_prompt;
use shot2test::publisher::PublishedImageUrl;

fn urls(names: &[&str]) -> Vec<PublishedImageUrl> {
    names.iter().map(|n| PublishedImageUrl::new(*n)).collect()
}

fn feature_numbers(prompt: &str) -> Vec<usize> {
    let re = Regex::new(r"### Feature (\d+): ").unwrap();
    re.captures_iter(prompt)
        .map(|c| c[1].parse().unwrap())
        .collect()
}

#[test]
fn test_two_screenshots_scenario() {
    let prompt = build_prompt("MyApp", &urls(&["u1", "u2"]));

    assert_eq!(prompt.matches("Feature 1").count(), 1);
    assert_eq!(prompt.matches("Feature 2").count(), 1);
    assert_eq!(feature_numbers(&prompt), vec![1, 2]);

    assert!(prompt.contains("### Example 1: Login Page Feature"));
    assert!(prompt.contains("### Example 2: Settings Page Feature"));
    assert!(prompt.contains("MyApp"));

    // URLs only drive the block count
    assert!(!prompt.contains("u1"));
    assert!(!prompt.contains("u2"));
}

#[test]
fn test_no_screenshots() {
    let prompt = build_prompt("MyApp", &[]);
    assert!(feature_numbers(&prompt).is_empty());
    assert!(prompt.contains("Expected Result*: The settings are saved"));
}

#[test]
fn test_default_limit_fits_many_features() {
    let many: Vec<PublishedImageUrl> = (0..40)
        .map(|i| PublishedImageUrl::new(format!("https://img/{}", i)))
        .collect();
    let prompt = build_prompt("MyApp", &many);
    assert!(prompt.chars().count() < 20_000);

    let too_many: Vec<PublishedImageUrl> = (0..80)
        .map(|i| PublishedImageUrl::new(format!("https://img/{}", i)))
        .collect();
    assert!(build_prompt("MyApp", &too_many).chars().count() > 20_000);
}

proptest! {
    #[test]
    fn prop_build_is_deterministic(
        name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
        list in proptest::collection::vec("https://[a-z]{1,10}\\.com/[a-z0-9]{1,8}", 0..12),
    ) {
        let list: Vec<PublishedImageUrl> = list.into_iter().map(PublishedImageUrl::new).collect();
        prop_assert_eq!(build_prompt(&name, &list), build_prompt(&name, &list));
    }

    #[test]
    fn prop_one_block_per_url(count in 0usize..25) {
        let list: Vec<PublishedImageUrl> = (0..count)
            .map(|i| PublishedImageUrl::new(format!("https://img/{}", i)))
            .collect();
        let prompt = build_prompt("Acme", &list);
        let expected: Vec<usize> = (1..=count).collect();
        prop_assert_eq!(feature_numbers(&prompt), expected);
    }
}
