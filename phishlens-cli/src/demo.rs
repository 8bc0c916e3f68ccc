//! Bundled sample pages for `phishlens demo`.

pub struct SamplePage {
    pub url: &'static str,
    pub html: &'static str,
}

/// Brand-borrowing page over plain http with a placeholder link and an
/// empty form action.
pub const PHISHING_STYLE: SamplePage = SamplePage {
    url: "http://facebook-Alertt-Com-Securitys.Com/",
    html: r##"
<html>
  <head><meta name="keywords" content="facebook, security, login"></head>
  <body>
    <a href="#">Click</a>
    <a href="https://www.facebook.com/">Official</a>
    <form method="post" action=""><input name="u"></form>
    <img src="https://cdn.example.com/logo.png"/>
  </body>
</html>
"##,
};

/// Ordinary https profile page posting to itself.
pub const PROFILE: SamplePage = SamplePage {
    url: "https://www.example.com/account/profile",
    html: r#"
<html><head><meta name="keywords" content="example,profile"/></head>
<body><a href="/home">Home</a><form method="post" action="/submit"><input name="n"></form></body></html>
"#,
};

pub const SAMPLES: [SamplePage; 2] = [PHISHING_STYLE, PROFILE];
