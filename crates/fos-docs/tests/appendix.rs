//! Tests for the compiled appendix page
//!
//! The page must render the same document on every pass while building
//! each of its static sections exactly once.

use std::sync::Arc;

use fos_docs::{appendix_a, APPENDIX_A_FILE, APPENDIX_A_STATICS};
use fos_static::{create_instance_state, destroy_instance_state, render, RenderData};
use fos_vdom::{same_node, NodeRef};

fn static_children(tree: &NodeRef) -> Vec<NodeRef> {
    tree.children()
        .iter()
        .filter(|child| child.is_static)
        .cloned()
        .collect()
}

#[test]
fn test_table_size() {
    let component = appendix_a();
    assert_eq!(component.name(), APPENDIX_A_FILE);
    assert_eq!(component.statics().len(), APPENDIX_A_STATICS);
}

#[test]
fn test_statics_in_table_order() {
    let component = Arc::new(appendix_a());
    let mut state = create_instance_state(&component);

    let tree = render(&mut state, &RenderData::new()).unwrap();
    let keys: Vec<String> = static_children(&tree)
        .iter()
        .filter_map(|node| node.key.clone())
        .collect();
    let expected: Vec<String> = (0..APPENDIX_A_STATICS)
        .map(|i| format!("__static__{i}"))
        .collect();

    assert_eq!(keys, expected);
    assert_eq!(tree.children().len(), 31);
}

#[test]
fn test_rerender_reuses_every_static() {
    let component = Arc::new(appendix_a());
    let mut state = create_instance_state(&component);
    let data = RenderData::new();

    let first = render(&mut state, &data).unwrap();
    let second = render(&mut state, &data).unwrap();

    assert_eq!(first, second);
    for (a, b) in static_children(&first).iter().zip(static_children(&second).iter()) {
        assert!(same_node(a, b));
    }
    let stats = state.stats();
    assert_eq!(stats.builds, APPENDIX_A_STATICS as u64);
    assert_eq!(stats.hits, APPENDIX_A_STATICS as u64);
    assert_eq!(stats.cached, APPENDIX_A_STATICS);

    destroy_instance_state(state);
}

#[test]
fn test_page_markup() {
    let component = Arc::new(appendix_a());
    let mut state = create_instance_state(&component);
    let html = render(&mut state, &RenderData::new()).unwrap().to_html();

    assert!(html.starts_with(
        r##"<div class="content"><h1 id="附录-a-较小变动"><a class="header-anchor" href="#附录-a-较小变动" aria-hidden="true">#</a> 附录 A 较小变动</h1> "##
    ));
    assert!(html.contains(r#"<span class="token constant">MAX_SAFE_INTEGER</span>"#));
    assert!(html.contains(
        r#"<a href="http://unicode.org/reports/tr31" target="_blank" rel="noopener noreferrer">正式指定的有效标识符<OutboundLink></OutboundLink></a> 中，包括以下规则：</p>"#
    ));
    assert!(html.contains("<code>Number.MIN_SAFE_INTEGER</code> 常量表示准确范围内的最小值。"));
    assert!(html.ends_with("<code>__proto__</code>属性被加入标准（不建议使用）</h2></div>"));
}

#[test]
fn test_code_block_text() {
    let component = Arc::new(appendix_a());
    let mut state = create_instance_state(&component);
    let tree = render(&mut state, &RenderData::new()).unwrap();

    let code = &static_children(&tree)[2];
    assert_eq!(
        code.text_content(),
        "// 传入一个值，引擎会查看该值的底层表示方式确定该值是否为整数：\n\
         console.log(Number.isInteger(25)); // true\n\
         console.log(Number.isInteger(25.0)); // true\n\
         console.log(Number.isInteger(25.1)); // false\n"
    );

    let pow = &static_children(&tree)[5];
    assert_eq!(
        pow.text_content(),
        "console.log(Math.pow(2, 53)); // 9007199254740992\n\
         console.log(Math.pow(2, 53) + 1); // 9007199254740992\n"
    );
}
