use cowsay_rs::{Mode, RenderRequest};
use insta::assert_snapshot;

mod common;
use common::*;

#[test]
fn test_render_default_say() {
    let output = render_ok(&RenderRequest::new(["hewllo woold!"]));
    assert_snapshot!(output);
}

#[test]
fn test_render_multiline_small_wired() {
    let request = RenderRequest::new(["line 1", "line 2", "line 3"])
        .character("small")
        .mood("wired");
    let output = render_ok(&request);
    assert_snapshot!(output);
}

#[test]
fn test_render_dragon_think() {
    let request =
        RenderRequest::new(["Here be dragons, and they have opinions about your code review"])
            .character("dragon")
            .mode(Mode::Think);
    let output = render_ok(&request);
    assert_snapshot!(output);
}

#[test]
fn test_render_wide_characters() {
    let request = RenderRequest::new(["日本語のテキストを折り返す テスト です"])
        .mood("dead")
        .columns(10);
    let output = render_ok(&request);
    assert_snapshot!(output);
}
