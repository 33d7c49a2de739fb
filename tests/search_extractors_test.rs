//! Per-page-type search behaviour on realistic page markup

use anyhow::Result;
use sitewright::search::{Page, PageType, ResultKind, perform_search};
use sitewright::SearchConfig;

mod common;

fn page(path: &str, body: &str) -> Result<Page> {
    let html = common::create_test_html("Test", body);
    Ok(Page::parse(&html, &format!("https://shop.example{path}"))?)
}

const HOME: &str = r#"
<section class="store">
  <h2>Our Games</h2>
  <div class="cStoreGame">
    <a href="/valorant"><img src="/img/valorant.png"></a>
    <h3 class="cStoreGame_name"> Valorant </h3>
    <p>Aimbot and ESP</p>
  </div>
  <div class="cStoreGame">
    <a href="/rust"><img src="/img/rust.png"></a>
    <h3 class="cStoreGame_name">Rust</h3>
    <p>Raid helper</p>
  </div>
</section>
<div class="ipsBox"><h3>Valorant</h3><p>Valorant is our most popular product.</p></div>
<section><h2>Why choose us</h2><p>Undetected valorant tools, updated daily.</p></section>
"#;

#[test]
fn home_finds_products_then_sections() -> Result<()> {
    let page = page("/", HOME)?;
    let results = perform_search(&page, "VALORANT", &SearchConfig::default());

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Valorant", "Our Games", "Why choose us"]);

    let product = &results[0];
    assert_eq!(product.kind, ResultKind::Product);
    assert_eq!(product.description, "Aimbot and ESP");
    assert_eq!(product.link.as_deref(), Some("https://shop.example/valorant"));
    assert_eq!(product.image.as_deref(), Some("https://shop.example/img/valorant.png"));
    assert!(product.element.is_none());

    let section = &results[2];
    assert_eq!(section.kind, ResultKind::Content);
    assert!(section.link.is_none());
    assert!(section.element.is_some());
    assert_eq!(section.description, "Why choose usUndetected valorant tools, updated daily.");
    Ok(())
}

#[test]
fn product_pages_share_the_home_extractor() -> Result<()> {
    assert_eq!(PageType::detect("/valorant"), PageType::Products);
    let page = page("/valorant", HOME)?;
    let results = perform_search(&page, "raid", &SearchConfig::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Rust");
    assert_eq!(results[0].kind, ResultKind::Product);
    // The surrounding section mentions it too
    assert_eq!(results[1].title, "Our Games");
    Ok(())
}

#[test]
fn results_are_capped() -> Result<()> {
    let cards: String = (1..=15)
        .map(|i| format!(r#"<div class="cStoreGame"><h3 class="cStoreGame_name">Game {i}</h3></div>"#))
        .collect();
    let page = page("/", &cards)?;

    let results = perform_search(&page, "game", &SearchConfig::default());
    assert_eq!(results.len(), 10);
    assert_eq!(results[9].title, "Game 10");

    let config = SearchConfig::default().with_max_results(3);
    assert_eq!(perform_search(&page, "game", &config).len(), 3);
    Ok(())
}

#[test]
fn queries_below_minimum_never_run() -> Result<()> {
    let page = page("/", HOME)?;
    assert!(perform_search(&page, "v", &SearchConfig::default()).is_empty());

    let config = SearchConfig::default().with_min_search_length(5);
    assert!(perform_search(&page, "rust", &config).is_empty());
    assert_eq!(perform_search(&page, "valor", &config).len(), 3);
    Ok(())
}

#[test]
fn reviews_truncate_long_text() -> Result<()> {
    let long_text = format!("The loader {}", "works great ".repeat(20));
    let body = format!(
        r#"<div class="vouch-item">
             <span class="vouch-username"> alice </span>
             <p class="vouch-text">{long_text}</p>
             <span class="vouch-stars">5/5</span>
           </div>
           <div class="review-item">
             <span class="review-author">bob</span>
             <p class="review-text">Loader installs in seconds</p>
           </div>
           <div class="testimonial"><span class="review-author">dave</span><p>Nice</p></div>"#
    );
    let page = page("/reviews.html", &body)?;
    let results = perform_search(&page, "LOADER", &SearchConfig::default());

    assert_eq!(results.len(), 2);
    let alice = &results[0];
    assert_eq!(alice.title, "alice");
    assert_eq!(alice.kind, ResultKind::Review);
    assert_eq!(alice.rating.as_deref(), Some("5/5"));
    assert!(alice.description.ends_with("..."));
    assert_eq!(alice.description.chars().count(), 153);
    assert!(alice.element.is_some());

    let bob = &results[1];
    assert_eq!(bob.description, "Loader installs in seconds");
    assert_eq!(bob.rating, None);
    Ok(())
}

#[test]
fn forum_reads_rows_then_topic_elements() -> Result<()> {
    let body = r#"
        <div class="ipsDataItem" data-topic-id="1">
          <h4 class="ipsDataItem_title"><a href="/topic/1">Spoofer setup help</a></h4>
          <div class="ipsDataItem_meta">Started by carol</div>
        </div>
        <div id="topic-2"><h3>Spoofer FAQ</h3></div>
        <div class="topic-item" data-title="Spoofer changelog"></div>
        <div id="topic-3"><h2>Spoofer setup help</h2></div>
    "#;
    let page = page("/forum.html", body)?;
    let results = perform_search(&page, "spoofer", &SearchConfig::default());

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Spoofer setup help", "Spoofer FAQ", "Spoofer changelog"]);
    assert!(results.iter().all(|r| r.kind == ResultKind::Topic));

    assert_eq!(results[0].description, "Started by carol");
    assert_eq!(results[0].link.as_deref(), Some("https://shop.example/topic/1"));
    assert_eq!(results[1].description, "Forum topic");
    assert_eq!(results[2].link, None);
    Ok(())
}

#[test]
fn status_reports_the_state_text() -> Result<()> {
    let body = r#"
        <div class="statusGroup">
          <h2 class="statusGroup__title">Shooters</h2>
          <div class="statusProduct">
            <h3 class="statusProduct__title">Valorant</h3>
            <span class="status"> Undetected </span>
            <p class="statusProduct__desc">Updated daily</p>
          </div>
        </div>
    "#;
    let page = page("/status", body)?;

    let results = perform_search(&page, "undetected", &SearchConfig::default());
    let pairs: Vec<(&str, &str)> = results
        .iter()
        .map(|r| (r.title.as_str(), r.description.as_str()))
        .collect();
    assert_eq!(pairs, [("Shooters", "Undetected"), ("Valorant", "Undetected")]);

    let results = perform_search(&page, "daily", &SearchConfig::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].kind, ResultKind::Status);
    Ok(())
}

#[test]
fn guides_match_on_title_with_snippet_description() -> Result<()> {
    let filler = "Step one. ".repeat(30);
    let body = format!(
        r#"<article><h2>HWID spoofer guide</h2><p>{filler}</p><p>Reboot after install.</p></article>
           <article><h2>Valorant setup</h2><p>Reboot twice.</p></article>"#
    );
    let page = page("/guides.html", &body)?;

    let results = perform_search(&page, "reboot", &SearchConfig::default());
    assert!(results.is_empty());

    let results = perform_search(&page, "spoofer", &SearchConfig::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind, ResultKind::Guide);
    assert!(results[0].description.starts_with("HWID spoofer guide"));
    assert!(results[0].description.ends_with("..."));
    Ok(())
}

#[test]
fn support_and_generic_pages() -> Result<()> {
    let body = r#"
        <div class="faq-item"><h4>Refunds</h4><p>Refunds within 24 hours.</p></div>
        <div class="support-item"><p>Refunds are not given for bans.</p></div>
    "#;
    let page = page("/support.html", body)?;
    let results = perform_search(&page, "refunds", &SearchConfig::default());
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Refunds", "Support Article"]);
    assert!(results.iter().all(|r| r.kind == ResultKind::Support));

    let body = r#"
        <main>
          <h1>Terms</h1>
          <section><h2>Payments</h2><p>All payments are final.</p></section>
        </main>
    "#;
    let page = self::page("/terms.html", body)?;
    assert_eq!(PageType::detect(page.url().path()), PageType::Generic);
    let results = perform_search(&page, "payments", &SearchConfig::default());
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    // main encloses the section, so it comes first in document order
    assert_eq!(titles, ["Terms", "Payments"]);
    Ok(())
}
