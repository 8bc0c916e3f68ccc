//! End-to-end analysis: URL + markup through features and rules.

use phishlens_analysis::{
    analyze, analyze_signals, extract_html_signals, DecisionStage, FeatureExtractor, FormSignal,
    HtmlSignals, Label,
};

const PHISHING_DEMO_URL: &str = "http://facebook-Alertt-Com-Securitys.Com/";
const PHISHING_DEMO_HTML: &str = r##"
<html>
  <head><meta name="keywords" content="facebook, security, login"></head>
  <body>
    <a href="#">Click</a>
    <a href="https://www.facebook.com/">Official</a>
    <form method="post" action=""><input name="u"></form>
    <img src="https://cdn.example.com/logo.png"/>
  </body>
</html>
"##;

const PROFILE_DEMO_URL: &str = "https://www.example.com/account/profile";
const PROFILE_DEMO_HTML: &str = r#"
<html><head><meta name="keywords" content="example,profile"/></head>
<body><a href="/home">Home</a><form method="post" action="/submit"><input name="n"></form></body></html>
"#;

#[test]
fn test_ip_host_with_empty_form_action() {
    let v = analyze(
        "http://192.168.10.5/login",
        r#"<form method="post" action=""><input name="pw"></form>"#,
    );
    assert!(v.features.has_ip);
    assert!(v.features.has_faction);
    assert!(!v.features.has_https);
    assert_eq!(v.label, Label::Phishing);
    assert_eq!(v.stage, DecisionStage::UrlObfuscation);
    assert_eq!(v.axiom_ids(), vec!["FAction", "IPurl", "HttpsFalse"]);
}

#[test]
fn test_same_host_profile_page_is_legitimate() {
    let v = analyze(
        "https://www.example.com/account/profile",
        r#"<head><meta name="keywords" content="example"></head>
           <body><a href="https://www.example.com/home">Home</a>
           <form method="post" action="https://www.example.com/submit"></form></body>"#,
    );
    assert_eq!(v.label, Label::Legitimate);
    assert_eq!(v.stage, DecisionStage::Normal);
    assert!(v.justification_axioms.is_empty());
}

#[test]
fn test_brand_meta_keywords_with_placeholder_anchor() {
    let v = analyze(
        "http://facebook-alertt-com-securitys.com/",
        r##"<head><meta name="keywords" content="facebook, login"></head>
            <body><a href="#">Continue</a></body>"##,
    );
    assert!(v.features.has_mkeyword);
    assert!(v.features.has_aurl);
    assert_eq!(v.label, Label::Phishing);
    assert_eq!(v.stage, DecisionStage::CredibilityLaundering);
    assert_eq!(v.axiom_ids(), vec!["Aurl", "MetaKeyword", "HttpsFalse"]);
}

#[test]
fn test_deeply_nested_host_over_http() {
    let v = analyze("http://a.b.c.d.e.example.com/", "");
    assert_eq!(v.features.has_sub_domain, 5);
    assert_eq!(v.label, Label::Phishing);
    assert_eq!(v.axiom_ids(), vec!["NofDots", "Subdomain", "HttpsFalse"]);
}

#[test]
fn test_phishing_demo_page() {
    let v = analyze(PHISHING_DEMO_URL, PHISHING_DEMO_HTML);
    let f = v.features;
    assert!(f.has_sap, "first label carries brand and hyphen");
    assert!(f.has_di_query);
    assert!(f.has_rurl, "only resource is on a CDN host");
    assert!(!f.has_lid_anchor, "a single hosted anchor is below the floor");
    assert_eq!(f.has_sub_domain, 0);
    assert_eq!(f.has_dots, 1);
    assert_eq!(v.label, Label::Phishing);
    assert_eq!(
        v.axiom_ids(),
        vec!["Aurl", "FAction", "MetaKeyword", "HttpsFalse"]
    );
}

#[test]
fn test_profile_demo_page() {
    let v = analyze(PROFILE_DEMO_URL, PROFILE_DEMO_HTML);
    assert_eq!(v.label, Label::Legitimate);
    assert!(v.justification_axioms.is_empty());
    assert!(v.explanation.contains("Legitimate"));
}

#[test]
fn test_empty_inputs_are_legitimate() {
    let v = analyze("", "");
    assert_eq!(v.label, Label::Legitimate);
    assert_eq!(v.features, Default::default());
}

#[test]
fn test_malformed_inputs_do_not_fail() {
    for url in ["::::", "http://[broken", "http://", "%%%", "javascript:alert(1)"] {
        let v = analyze(url, "<a href=<<form action=>>");
        assert_eq!(v.label == Label::Phishing, !v.justification_axioms.is_empty());
    }
}

#[test]
fn test_cross_domain_anchor_majority() {
    let html = r#"
        <a href="https://a.test/">a</a>
        <a href="https://b.test/">b</a>
        <a href="https://c.test/">c</a>
        <a href="https://shop.example.com/">own</a>
    "#;
    let v = analyze("https://shop.example.com/", html);
    assert!(v.features.has_lid_anchor);
    // https page and hasLIdAnchor is not a weak signal: fallback score 0
    assert_eq!(v.stage, DecisionStage::Fallback);
    assert_eq!(v.label, Label::Legitimate);
}

#[test]
fn test_tld_in_path_with_offsite_form() {
    let v = analyze(
        "https://secure-login.example.net/www.bank.com/verify",
        r#"<form action="https://collector.test/post"></form>"#,
    );
    assert!(v.features.has_tld_path);
    assert!(v.features.has_faction);
    assert_eq!(v.stage, DecisionStage::UrlObfuscation);
    assert_eq!(
        v.axiom_ids(),
        vec!["TldPath", "FAction", "DIquery", "HttpsFalse"]
    );
}

#[test]
fn test_markup_and_signals_entry_points_agree() {
    let signals = extract_html_signals(PHISHING_DEMO_HTML);
    assert_eq!(
        analyze(PHISHING_DEMO_URL, PHISHING_DEMO_HTML),
        analyze_signals(PHISHING_DEMO_URL, &signals)
    );
}

#[test]
fn test_extractor_on_hand_built_signals() {
    let signals = HtmlSignals {
        hrefs: vec!["javascript:;".into()],
        imgs: vec!["https://img.other.test/a.png".into(), "/b.png".into()],
        forms: vec![FormSignal::new("post", "/login")],
        meta_keywords: "apple, icloud".into(),
        ..Default::default()
    };
    let f = FeatureExtractor::extract("http://apple.com.account-check.ru/signin", &signals);
    assert!(f.has_aurl);
    assert!(f.has_rurl);
    assert!(!f.has_faction);
    assert!(!f.has_mkeyword, "a brand naming the page's own first label is not a mismatch");
    assert_eq!(f.has_sub_domain, 2);
}

#[test]
fn test_path_params_do_not_feed_tld_or_brand_checks() {
    let v = analyze("http://x.com/a/b;paypal.com", "");
    assert!(!v.features.has_tld_path);
    assert!(!v.features.has_di_query);
    assert_eq!(v.label, Label::Legitimate);
    assert!(v.justification_axioms.is_empty());

    let v = analyze("http://x.com/p;amazon", "");
    assert!(!v.features.has_di_query);
    assert_eq!(v.label, Label::Legitimate);
}

#[test]
fn test_params_in_an_earlier_segment_stay_in_the_path() {
    let v = analyze("http://x.com/a;paypal.com/b", "");
    assert!(v.features.has_tld_path);
    assert!(v.features.has_di_query);
    assert_eq!(v.label, Label::Phishing);
}
