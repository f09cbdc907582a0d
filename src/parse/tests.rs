// Parse module tests.

use super::*;
use crate::error_handling::{ExtractionStats, WarningType};
use scraper::Html;
use strum::IntoEnumIterator;

fn test_stats() -> ExtractionStats {
    ExtractionStats::new()
}

#[test]
fn test_extract_title_basic() {
    let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
    let document = Html::parse_document(html);
    let stats = test_stats();
    assert_eq!(extract_title(&document, &stats), "Test Page");
    assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 0);
}

#[test]
fn test_extract_title_with_whitespace() {
    let html = r#"<html><head><title>
        Test Page
    </title></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document, &test_stats()), "Test Page");
}

#[test]
fn test_extract_title_with_html_entities() {
    let html = r#"<html><head><title>Tom &amp; Jerry</title></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document, &test_stats()), "Tom & Jerry");
}

#[test]
fn test_extract_title_missing() {
    let html = r#"<html><head></head><body></body></html>"#;
    let document = Html::parse_document(html);
    let stats = test_stats();
    assert_eq!(extract_title(&document, &stats), "");
    assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);
}

#[test]
fn test_extract_title_multiple_tags() {
    let html = r#"<html><head><title>First</title><title>Second</title></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document, &test_stats()), "First");
}

#[test]
fn test_extract_meta_tags_name_priority() {
    let html = r#"<html><head>
        <meta itemprop="name" property="og:title" name="title" content="A">
        <meta property="og:title" name="title" content="B">
        <meta name="description" content="C">
        <meta itemprop="" property="og:image" content="D">
    </head></html>"#;
    let document = Html::parse_document(html);
    let tags = extract_meta_tags(&document);
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["name", "og:title", "description", "og:image"]);
    assert_eq!(tags[3].content, "D");
}

#[test]
fn test_extract_meta_tags_skips_unnamed() {
    let html = r#"<html><head>
        <meta charset="utf-8">
        <meta http-equiv="X-UA-Compatible" content="IE=edge">
        <meta name="keywords">
    </head></html>"#;
    let document = Html::parse_document(html);
    let tags = extract_meta_tags(&document);
    assert_eq!(
        tags,
        vec![MetaTag {
            name: "keywords".to_string(),
            content: String::new(),
        }]
    );
}

#[test]
fn test_extract_meta_tags_ignores_body_meta() {
    let html = r#"<html><head><meta name="description" content="head"></head>
        <body><div><meta itemprop="price" content="10"></div></body></html>"#;
    let document = Html::parse_document(html);
    let tags = extract_meta_tags(&document);
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].content, "head");
}

#[test]
fn test_extract_json_ld_single_block() {
    let html = r#"<html><head>
        <script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
    </head></html>"#;
    let document = Html::parse_document(html);
    let records = extract_json_ld(&document, &test_stats());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Acme");
}

#[test]
fn test_extract_json_ld_malformed_block_is_skipped() {
    let html = r#"<html><head>
        <script type="application/ld+json">{"description": "broken",</script>
        <script type="application/ld+json">{"description": "ok"}</script>
    </head></html>"#;
    let document = Html::parse_document(html);
    let stats = test_stats();
    let records = extract_json_ld(&document, &stats);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["description"], "ok");
    assert_eq!(stats.get_warning_count(WarningType::MalformedJsonLd), 1);
}

#[test]
fn test_extract_json_ld_array_block() {
    let html = r#"<html><head><script type="application/ld+json">[{"@type": "WebPage"}, "junk", {"@type": "Organization"}]</script></head></html>"#;
    let document = Html::parse_document(html);
    let records = extract_json_ld(&document, &test_stats());
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["@type"], "Organization");
}

#[test]
fn test_extract_json_ld_case_insensitive_type() {
    let html = r#"<html><head><script type=" APPLICATION/LD+JSON ">{"@type": "WebPage"}</script></head></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_json_ld(&document, &test_stats()).len(), 1);
}

#[test]
fn test_extract_json_ld_ignores_other_scripts() {
    let html = r#"<html><head>
        <script type="text/javascript">var x = {"description": "no"};</script>
        <script>{"description": "no"}</script>
    </head></html>"#;
    let document = Html::parse_document(html);
    let stats = test_stats();
    assert!(extract_json_ld(&document, &stats).is_empty());
    assert_eq!(stats.get_warning_count(WarningType::MalformedJsonLd), 0);
}

#[test]
fn test_extract_mailto_addresses() {
    let html = r#"<html><body>
        <a href="mailto:hello@acme.com">Email us</a>
        <a href="MAILTO:ignored@acme.com">Case differs</a>
        <a href="mailto:sales@acme.com?subject=Hi">Sales</a>
        <a href="https://acme.com/contact">Contact</a>
        <a href="mailto:">Empty</a>
    </body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        extract_mailto_addresses(&document),
        vec!["hello@acme.com", "sales@acme.com"]
    );
}

const PROFILE_PAGE: &str = r#"<html><head><title>Zach (@zach) | Twitter</title></head><body>
    <img class="ProfileAvatar-image" src="https://pbs.example.com/zach.jpg">
    <p class="ProfileHeaderCard-bio">  building things github.com/zach #rust  </p>
    <a class="ProfileHeaderCard-nameLink">Zach</a>
    <a class="ProfileHeaderCard-screennameLink"> @zach </a>
    <span class="ProfileHeaderCard-locationText">Minneapolis, MN</span>
    <span class="ProfileHeaderCard-url"> zach.dev </span>
    <span class="ProfileHeaderCard-joinDateText">Joined March 2009</span>
    <ul>
        <li class="ProfileNav-item--tweets"><span class="ProfileNav-value" data-count="1234">1.2K</span></li>
        <li class="ProfileNav-item--following"><span class="ProfileNav-value" data-count="56">56</span></li>
        <li class="ProfileNav-item--followers"><span class="ProfileNav-value" data-count="789">789</span></li>
        <li class="ProfileNav-item--favorites"><span class="ProfileNav-value" data-count="10">10</span></li>
    </ul>
</body></html>"#;

#[test]
fn test_extract_social_profile_complete_page() {
    let document = Html::parse_document(PROFILE_PAGE);
    let stats = test_stats();
    let profile = extract_social_profile(&document, &stats);

    assert_eq!(profile.photo, "https://pbs.example.com/zach.jpg");
    assert_eq!(profile.bio, "building things github.com/zach #rust");
    assert_eq!(profile.name, "Zach");
    assert_eq!(profile.username, "@zach");
    assert_eq!(profile.location, "Minneapolis, MN");
    assert_eq!(profile.website, "zach.dev");
    assert_eq!(profile.joined_date, "Joined March 2009");
    assert_eq!(profile.tweet_count, Some(1234));
    assert_eq!(profile.following_count, Some(56));
    assert_eq!(profile.follower_count, Some(789));
    assert_eq!(profile.likes_count, Some(10));
    assert!(profile.missing_fields.is_empty());
    assert_eq!(stats.get_warning_count(WarningType::MissingProfileField), 0);
}

#[test]
fn test_extract_social_profile_missing_website() {
    let html = PROFILE_PAGE.replace(
        r#"<span class="ProfileHeaderCard-url"> zach.dev </span>"#,
        "",
    );
    let document = Html::parse_document(&html);
    let stats = test_stats();
    let profile = extract_social_profile(&document, &stats);

    assert_eq!(profile.website, "");
    assert_eq!(profile.missing_fields, vec![ProfileField::Website]);
    assert_eq!(profile.name, "Zach");
    assert_eq!(stats.get_warning_count(WarningType::MissingProfileField), 1);
}

#[test]
fn test_extract_social_profile_non_numeric_count() {
    let html = PROFILE_PAGE.replace(r#"data-count="56""#, r#"data-count="lots""#);
    let document = Html::parse_document(&html);
    let profile = extract_social_profile(&document, &test_stats());
    assert_eq!(profile.following_count, None);
    assert_eq!(profile.missing_fields, vec![ProfileField::FollowingCount]);
}

#[test]
fn test_extract_social_profile_unrelated_page() {
    let document = Html::parse_document("<html><body><p>Just a page</p></body></html>");
    let stats = test_stats();
    let profile = extract_social_profile(&document, &stats);

    let all_fields: Vec<ProfileField> = ProfileField::iter().collect();
    assert_eq!(profile.missing_fields, all_fields);
    assert_eq!(profile.bio, "");
    assert_eq!(profile.tweet_count, None);
    assert_eq!(
        stats.get_warning_count(WarningType::MissingProfileField),
        all_fields.len()
    );
}

#[test]
fn test_social_profile_serializes_camel_case() {
    let document = Html::parse_document("<html><body></body></html>");
    let profile = extract_social_profile(&document, &test_stats());
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["joinedDate"], "");
    assert!(json["likesCount"].is_null());
    assert_eq!(json["missingFields"][0], "photo");
    assert_eq!(json["missingFields"][6], "joinedDate");
}
