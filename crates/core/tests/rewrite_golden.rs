use insta::assert_snapshot;
use mdbyline_core::document::rewrite;

#[test]
fn golden_article_author_only() {
    let input = include_str!("fixtures/article.md");

    let result = rewrite(input, "Jane", false);

    assert_snapshot!(result.content, @r#"
---
title: "公众号排版笔记"
# keep this comment
tags:
  - notion
  - weixin
meta:
  author: nested value stays
author: Jane
date: 2024-03-01
---

# 公众号排版笔记

正文第一段。
"#);
}

#[test]
fn golden_article_with_byline() {
    let input = include_str!("fixtures/article.md");

    let result = rewrite(input, "Jane", true);

    assert!(result.byline_inserted);
    assert_snapshot!(result.content, @r#"
---
title: "公众号排版笔记"
# keep this comment
tags:
  - notion
  - weixin
meta:
  author: nested value stays
author: Jane
date: 2024-03-01
---

*作者：Jane*

# 公众号排版笔记

正文第一段。
"#);
}
