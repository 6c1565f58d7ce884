//! End-to-end wiring: install the extension into a lifecycle with host
//! defaults, drive the host events, and check what comes out.

use std::fs;
use std::io::Write;

use genesis_child::{
    ChildThemeConfig, GenesisChild, HeadOutput, Lifecycle, StylesheetQueue, ThemeHost, UpdateItem,
    HEAD_STYLE_HOOK,
};
use genesis_hooks::Action;

#[derive(Clone)]
struct FakeHost {
    supports_custom_header: bool,
    head_callback: Option<String>,
    header_selector: Option<String>,
    default_text_color: String,
    image: Option<String>,
    text_color: String,
    show_text: bool,
    html5: bool,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            supports_custom_header: true,
            head_callback: None,
            header_selector: None,
            default_text_color: "000000".into(),
            image: None,
            text_color: "000000".into(),
            show_text: false,
            html5: true,
        }
    }
}

impl ThemeHost for FakeHost {
    fn supports_feature(&self, feature: &str) -> bool {
        feature == "custom-header" && self.supports_custom_header
    }

    fn feature_option(&self, feature: &str, key: &str) -> Option<String> {
        if feature != "custom-header" {
            return None;
        }
        match key {
            "wp-head-callback" => self.head_callback.clone(),
            "header-selector" => self.header_selector.clone(),
            "default-text-color" => Some(self.default_text_color.clone()),
            _ => None,
        }
    }

    fn header_image_url(&self) -> Option<String> {
        self.image.clone()
    }

    fn header_text_color(&self) -> String {
        self.text_color.clone()
    }

    fn displays_header_text(&self) -> bool {
        self.show_text
    }

    fn uses_html5_markup(&self) -> bool {
        self.html5
    }
}

fn theme_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut file = fs::File::create(dir.path().join("style.min.css")).unwrap();
    writeln!(file, "body {{ margin: 0; }}").unwrap();
    dir
}

fn host_lifecycle() -> Lifecycle {
    // The host's stock hook table: a default header style under the name the
    // extension overrides, plus an unrelated head entry that must survive.
    Lifecycle {
        document_head: Action::new()
            .add(HEAD_STYLE_HOOK, 10, |out: &mut HeadOutput| {
                out.push_style("/* stock header style */")
            })
            .add("favicon", 20, |out: &mut HeadOutput| {
                out.push_style("/* favicon */")
            }),
        ..Lifecycle::new()
    }
}

#[test]
fn install_replaces_only_the_header_style_entry() {
    let dir = theme_dir();
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme")
        .with_theme_name("Example Child");
    let host = FakeHost {
        image: Some("http://x/img.png".into()),
        ..FakeHost::default()
    };

    let lifecycle = GenesisChild::new(config, host).install(host_lifecycle());
    let head = lifecycle.render_head();

    assert_eq!(head.styles().len(), 2);
    assert!(head.styles()[0].contains("background-image:url(http://x/img.png)"));
    assert_eq!(head.styles()[1], "/* favicon */");
    assert!(!head
        .styles()
        .iter()
        .any(|css| css.contains("stock header style")));
}

#[test]
fn head_is_silent_when_theme_brings_its_own_callback() {
    let dir = theme_dir();
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme");
    let host = FakeHost {
        head_callback: Some("my_theme_header".into()),
        image: Some("http://x/img.png".into()),
        ..FakeHost::default()
    };

    let lifecycle = GenesisChild::new(config, host).install(Lifecycle::new());
    assert!(lifecycle.render_head().is_empty());
}

#[test]
fn selector_override_reaches_the_rendered_css() {
    let dir = theme_dir();
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme");
    let host = FakeHost {
        header_selector: Some(".masthead".into()),
        image: Some("http://x/img.png".into()),
        show_text: true,
        text_color: "222222".into(),
        html5: false,
        ..FakeHost::default()
    };

    let lifecycle = GenesisChild::new(config, host).install(Lifecycle::new());
    let head = lifecycle.render_head();
    let css = &head.styles()[0];

    assert!(css.starts_with(".masthead{background-image"));
    // Title and description still follow the markup mode.
    assert!(css.contains(".custom-header #title a"));
    assert!(css.contains("color: #222222"));
}

#[test]
fn enqueue_event_collects_the_main_stylesheet() {
    let dir = theme_dir();
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme/")
        .with_theme_name("Example Child");

    let lifecycle =
        GenesisChild::new(config, FakeHost::default()).install(Lifecycle::new());
    let queue = lifecycle.collect_stylesheets();

    assert_eq!(queue.registrations().len(), 1);
    let registration = &queue.registrations()[0];
    assert_eq!(registration.handle, "example-child");
    assert_eq!(registration.url, "https://example.com/theme/style.min.css");
    assert!(registration.version.parse::<u64>().is_ok());
}

#[test]
fn enqueue_runs_before_default_priority_entries() {
    let dir = theme_dir();
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme");

    let host_side = Lifecycle {
        enqueue_scripts: Action::new().add("host-extras", 10, |queue: &mut StylesheetQueue| {
            queue.enqueue(genesis_child::StylesheetRegistration {
                handle: "host-extras".into(),
                url: "https://example.com/extras.css".into(),
                version: "1".into(),
            })
        }),
        ..Lifecycle::new()
    };

    let lifecycle = GenesisChild::new(config, FakeHost::default()).install(host_side);
    let queue = lifecycle.collect_stylesheets();

    assert_eq!(queue.registrations().len(), 2);
    assert_eq!(queue.registrations()[0].handle, "child-theme");
    assert_eq!(queue.registrations()[1].handle, "host-extras");
}

#[test]
fn missing_stylesheet_does_not_break_the_enqueue_event() {
    let dir = tempfile::tempdir().unwrap(); // no style.min.css inside
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme");

    let lifecycle =
        GenesisChild::new(config, FakeHost::default()).install(Lifecycle::new());
    let queue = lifecycle.collect_stylesheets();

    assert!(queue.registrations().is_empty());
}

#[test]
fn auto_update_filter_only_forces_genesis() {
    let dir = theme_dir();
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme");

    let lifecycle =
        GenesisChild::new(config, FakeHost::default()).install(Lifecycle::new());

    assert!(lifecycle.auto_update.apply(false, &UpdateItem::new("genesis")));
    assert!(!lifecycle
        .auto_update
        .apply(false, &UpdateItem::new("twentytwenty")));
    assert!(lifecycle
        .auto_update
        .apply(true, &UpdateItem::new("twentytwenty")));
}

#[test]
fn repeated_renders_are_identical() {
    let dir = theme_dir();
    let config = ChildThemeConfig::new(dir.path(), "https://example.com/theme");
    let host = FakeHost {
        image: Some("http://x/img.png".into()),
        show_text: true,
        text_color: "abc123".into(),
        ..FakeHost::default()
    };

    let lifecycle = GenesisChild::new(config, host).install(Lifecycle::new());
    assert_eq!(
        lifecycle.render_head().styles(),
        lifecycle.render_head().styles()
    );
}
