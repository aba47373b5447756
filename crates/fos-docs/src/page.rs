//! Appendix A: minor changes
//!
//! The page has no bindings, so everything except the separating
//! whitespace and a few paragraphs lives in the static table.

use fos_static::{CompiledComponent, RenderScope, Result, StaticBuilderTable};
use fos_vdom::Node;

use crate::highlight::{
    code_block, comment, constant, func, keyword, num, operator, plain, punct, string, Token,
};

/// Markdown source the page was compiled from
pub const APPENDIX_A_FILE: &str = "附录A.md";

/// Static builders in the page's table
pub const APPENDIX_A_STATICS: usize = 13;

/// Build the compiled appendix page
pub fn appendix_a() -> CompiledComponent {
    let statics = StaticBuilderTable::new()
        .with(|_| Ok(heading("h1", "附录-a-较小变动", vec![Node::text(" 附录 A 较小变动")])))
        .with(|_| Ok(heading("h2", "识别整数", vec![Node::text(" 识别整数")])))
        .with(|_| Ok(code_block(&integer_checks())))
        .with(|_| Ok(quote(vec![Node::text("只给数字添加小数点不会被存储为浮点数，如上")])))
        .with(|_| Ok(heading("h2", "安全整数", vec![Node::text(" 安全整数")])))
        .with(|_| Ok(code_block(&pow_limits())))
        .with(|_| Ok(code_block(&safe_integer_checks())))
        .with(|_| {
            Ok(quote(vec![
                inline_code("Number.MIN_SAFE_INTEGER"),
                Node::text(" 常量表示准确范围内的最小值。"),
            ]))
        })
        .with(|_| {
            Ok(heading(
                "h2",
                "新的-math-方法",
                vec![Node::text(" 新的 "), inline_code("Math"), Node::text(" 方法")],
            ))
        })
        .with(|_| Ok(heading("h2", "unicode-标识符", vec![Node::text(" Unicode 标识符")])))
        .with(|_| Ok(code_block(&escaped_identifiers())))
        .with(|_| {
            Ok(Node::element("ul")
                .with_child(Node::element("li").with_child(Node::text(
                    "第一个字符必须是$、_ 或任何带有 ID_Start 的派生核心属性的 Unicode 符号",
                )))
                .with_child(Node::text(" "))
                .with_child(Node::element("li").with_child(Node::text(
                    "后续的每个字符必须是$、_、\\u200c（零宽度不连字，zero-width non-joiner）、\
                     \\u200d（零宽度连字、zero-width joiner）或具有 ID_Continue 的派生核心属性的任何 Unicode 符号。",
                ))))
        })
        .with(|_| {
            Ok(heading(
                "h2",
                "proto-属性被加入标准（不建议使用）",
                vec![
                    Node::text(" "),
                    inline_code("__proto__"),
                    Node::text("属性被加入标准（不建议使用）"),
                ],
            ))
        });

    tracing::debug!("Compiled {} with {} statics", APPENDIX_A_FILE, statics.len());
    CompiledComponent::from_fn(APPENDIX_A_FILE, statics, render_appendix_a)
}

fn render_appendix_a(scope: &mut RenderScope<'_>) -> Result<Node> {
    let link = scope
        .element("a")
        .with_attr("href", "http://unicode.org/reports/tr31")
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
        .with_child(scope.text("正式指定的有效标识符"))
        .with_child(scope.element("OutboundLink"));

    Ok(scope
        .element("div")
        .with_static_class("content")
        .with_child(scope.static_tree(0, false)?)
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(1, false)?)
        .with_child(scope.text(" "))
        .with_child(paragraph(
            scope,
            "JavsScript 使用 IEEE 754 编码系统表示整数和浮点数。浮点数和整数的存储方式不同，有可能需要判断：",
        ))
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(2, false)?)
        .with_child(scope.static_tree(3, false)?)
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(4, false)?)
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(5, false)?)
        .with_child(paragraph(
            scope,
            "IEEE 754 只能准确表示 -2^53 ~ 2^53 之间的整数。需要检测变量是否是准确范围内的整数：",
        ))
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(6, false)?)
        .with_child(scope.static_tree(7, false)?)
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(8, false)?)
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(9, false)?)
        .with_child(scope.text(" "))
        .with_child(paragraph(
            scope,
            "以前可用Unicode转义字符作为标识符，现在可用码位转义字符作标识符：",
        ))
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(10, false)?)
        .with_child(
            scope
                .element("p")
                .with_child(link)
                .with_child(scope.text(" 中，包括以下规则：")),
        )
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(11, false)?)
        .with_child(scope.text(" "))
        .with_child(paragraph(
            scope,
            "ID_Start、ID_Continue 派生的核心属性，用于标识适用于标识符（变量名和符号）的符号，非 js 特有。",
        ))
        .with_child(scope.text(" "))
        .with_child(scope.static_tree(12, false)?))
}

fn paragraph(scope: &RenderScope<'_>, text: &str) -> Node {
    scope.element("p").with_child(scope.text(text))
}

/// Heading with its `#` permalink anchor
fn heading(tag: &str, id: &str, rest: Vec<Node>) -> Node {
    let anchor = Node::element("a")
        .with_static_class("header-anchor")
        .with_attr("href", format!("#{id}"))
        .with_attr("aria-hidden", "true")
        .with_child(Node::text("#"));

    Node::element(tag)
        .with_attr("id", id)
        .with_child(anchor)
        .with_children(rest)
}

fn quote(content: Vec<Node>) -> Node {
    Node::element("blockquote").with_child(Node::element("p").with_children(content))
}

fn inline_code(text: &str) -> Node {
    Node::element("code").with_child(Node::text(text))
}

/// `console.log(Number.<check>(<arg>)); // <result>`
fn number_check(lead: &'static str, check: &'static str, arg: Token, result: &'static str) -> [Token; 14] {
    [
        plain(lead),
        punct("."),
        func("log"),
        punct("("),
        plain("Number"),
        punct("."),
        func(check),
        punct("("),
        arg,
        punct(")"),
        punct(")"),
        punct(";"),
        plain(" "),
        comment(result),
    ]
}

fn integer_checks() -> Vec<Token> {
    [
        &[comment("// 传入一个值，引擎会查看该值的底层表示方式确定该值是否为整数：")][..],
        &number_check("\nconsole", "isInteger", num("25"), "// true")[..],
        &number_check("\nconsole", "isInteger", num("25.0"), "// true")[..],
        &number_check("\nconsole", "isInteger", num("25.1"), "// false")[..],
        &[plain("\n")][..],
    ]
    .concat()
}

fn pow_limits() -> Vec<Token> {
    let pow = |lead| {
        [
            plain(lead),
            punct("."),
            func("log"),
            punct("("),
            plain("Math"),
            punct("."),
            func("pow"),
            punct("("),
            num("2"),
            punct(","),
            plain(" "),
            num("53"),
            punct(")"),
        ]
    };

    [
        &pow("console")[..],
        &[punct(")"), punct(";"), plain(" "), comment("// 9007199254740992")][..],
        &pow("\nconsole")[..],
        &[
            plain(" "),
            operator("+"),
            plain(" "),
            num("1"),
            punct(")"),
            punct(";"),
            plain(" "),
            comment("// 9007199254740992"),
        ][..],
        &[plain("\n")][..],
    ]
    .concat()
}

fn safe_integer_checks() -> Vec<Token> {
    [
        &[
            keyword("var"),
            plain(" inside "),
            operator("="),
            plain(" Number"),
            punct("."),
            constant("MAX_SAFE_INTEGER"),
            punct(","),
            plain(" "),
            comment("// ES 6 引入的常量，表示范围的最大值"),
            plain("\n    outside "),
            operator("="),
            plain(" inside "),
            operator("+"),
            plain(" "),
            num("1"),
            punct(";"),
        ][..],
        &number_check("\n\nconsole", "isInteger", plain("inside"), "// true")[..],
        &number_check("\nconsole", "isSafeInteger", plain("inside"), "// true")[..],
        &number_check("\n\nconsole", "isInteger", plain("outside"), "// true")[..],
        &number_check("\nconsole", "isSafeInteger", plain("outside"), "// false")[..],
        &[plain("\n")][..],
    ]
    .concat()
}

fn escaped_identifiers() -> Vec<Token> {
    vec![
        comment("// 合法"),
        plain("\n"),
        keyword("var"),
        plain(" \\u"),
        punct("{"),
        num("61"),
        punct("}"),
        plain(" "),
        operator("="),
        plain(" "),
        string("'abc'"),
        punct(";"),
        plain("\n\nconsole"),
        punct("."),
        func("log"),
        punct("("),
        plain("\\u"),
        punct("{"),
        num("61"),
        punct("}"),
        punct(")"),
        punct(";"),
        plain(" "),
        comment("// 'abc'"),
        plain("\n\nconsole"),
        punct("."),
        func("log"),
        punct("("),
        plain("a"),
        punct(")"),
        punct(";"),
        plain(" "),
        comment("// 'abc'"),
        plain("\n"),
    ]
}
