use super::*;

#[test]
fn embedded_json_round_trips() {
    let config = SiteConfig::default();
    let json = to_embedded_json(&config).expect("json");
    assert_eq!(from_embedded_json(&json).expect("config"), config);
}

#[test]
fn embedded_json_cannot_close_the_script_element() {
    let config = SiteConfig {
        company_name: "</script><script>alert(1)</script>".to_owned(),
        ..SiteConfig::default()
    };
    let json = to_embedded_json(&config).expect("json");
    assert!(!json.contains("</"));

    let back = from_embedded_json(&json).expect("config");
    assert_eq!(back.company_name, config.company_name);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = from_embedded_json("{not json").unwrap_err();
    assert!(matches!(err, EmbedError::Parse(_)));
    let message = err.to_string();
    assert!(message.starts_with("malformed embedded site config"));
}

#[test]
fn page_config_exposes_site_and_json() {
    let page = PageConfig::new(SiteConfig::default()).expect("page config");
    assert_eq!(page.site().company_name, "Intelitech");
    let parsed = from_embedded_json(page.embedded_json()).expect("config");
    assert_eq!(parsed, *page.site());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_embedded_is_missing_without_a_document() {
    assert!(matches!(read_embedded(), Err(EmbedError::Missing)));
    assert_eq!(
        EmbedError::Missing.to_string(),
        "no #site-config element in the document"
    );
}
