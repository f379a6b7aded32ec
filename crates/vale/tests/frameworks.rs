//! Framework detection and override through the public conversion API.

use mdx2vast_vale::{FRAMEWORKS, Options, find_profile, to_vale_html};

const STARLIGHT: &str = "import { Aside, Card } from '@astrojs/starlight/components';";
const FERN: &str = "import { Callout } from '@fern-ui/components';";
const MINTLIFY: &str = "import { Callout } from '@mintlify/components';";

fn convert(input: &str) -> String {
    to_vale_html(input, &Options::default()).unwrap()
}

fn convert_as(input: &str, framework: &str) -> String {
    let options = Options {
        framework: Some(framework.to_string()),
        ..Options::default()
    };
    to_vale_html(input, &options).unwrap()
}

fn unwrapped(html: &str, component: &str) -> bool {
    html.contains(&format!("data-component=\"{component}\""))
}

#[test]
fn starlight_components() {
    let input = format!("{STARLIGHT}\n\n<Aside>\n  Be careful.\n</Aside>\n\n<FileTree>\n  - src\n</FileTree>\n\n<Note>\n  Not here.\n</Note>");
    let html = convert(&input);

    assert!(unwrapped(&html, "Aside"));
    assert!(unwrapped(&html, "FileTree"));
    assert!(!unwrapped(&html, "Note"));
    assert!(html.contains("<p>Be careful.</p>"));
}

#[test]
fn fern_components() {
    let input = format!("{FERN}\n\n<Callout>\n  Hidden.\n</Callout>\n\n<Launch>\n  Go.\n</Launch>");
    let html = convert(&input);

    assert!(unwrapped(&html, "Launch"));
    assert!(!unwrapped(&html, "Callout"));
    assert!(html.contains("&lt;Callout&gt;"));
}

#[test]
fn mintlify_components() {
    let input = format!("{MINTLIFY}\n\n<Callout>\n  Shown.\n</Callout>\n\n<Launch>\n  Hidden.\n</Launch>");
    let html = convert(&input);

    assert!(unwrapped(&html, "Callout"));
    assert!(!unwrapped(&html, "Launch"));
}

#[test]
fn fern_outranks_mintlify() {
    let input = format!("{MINTLIFY}\n{FERN}\n\n<Callout>\n  Which?\n</Callout>");
    assert!(!unwrapped(&convert(&input), "Callout"));
}

#[test]
fn override_replaces_detection() {
    let input = format!("{STARLIGHT}\n\n<Callout>\n  Text.\n</Callout>");

    assert!(!unwrapped(&convert(&input), "Callout"));
    assert!(unwrapped(&convert_as(&input, "mintlify"), "Callout"));
    assert!(unwrapped(&convert_as(&input, "MINTLIFY"), "Callout"));
}

#[test]
fn override_applies_without_imports() {
    let html = convert_as("<Step>\n  First.\n</Step>", "fern");
    assert!(unwrapped(&html, "Step"));
}

#[test]
fn unknown_override_falls_back_to_detection() {
    let input = format!("{MINTLIFY}\n\n<Callout>\n  Text.\n</Callout>");
    assert!(unwrapped(&convert_as(&input, "docusaurus"), "Callout"));
    assert!(!unwrapped(&convert_as("<Callout>\n  Text.\n</Callout>", "docusaurus"), "Callout"));
}

#[test]
fn unwrapped_children_keep_mdx_handling() {
    let input = format!(
        "{MINTLIFY}\n\n<Note>\n  Use {{props.name}} with <Badge>new</Badge> and **care**.\n\n  {{/* hidden */}}\n</Note>"
    );
    let html = convert(&input);

    assert!(unwrapped(&html, "Note"));
    assert!(html.contains("<code class=\"mdxNode mdxTextExpression\">{props.name}</code>"));
    assert!(html.contains("<code class=\"mdxNode mdxJsxTextElement\">&lt;Badge&gt;new&lt;/Badge&gt;</code>"));
    assert!(html.contains("<strong>care</strong>"));
    assert!(html.contains("<!-- hidden -->"));
}

#[test]
fn registry_lookup_matches_priority_order() {
    let ids: Vec<_> = FRAMEWORKS.iter().map(|profile| profile.id).collect();
    assert_eq!(ids, ["starlight", "fern", "mintlify"]);
    assert_eq!(find_profile("Fern").map(|profile| profile.pattern), Some("@fern-ui/"));
    assert!(find_profile("docusaurus").is_none());
}
