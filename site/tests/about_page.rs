use site::document::{Block, Inline};
use site::pages::{self, AboutPage, Page};
use site::parser::Parser;
use site::render;

#[test]
fn rendering_is_idempotent() {
    assert_eq!(AboutPage.render(), AboutPage.render());
    assert_eq!(render::html(&AboutPage.render()), render::html(&AboutPage.render()));
    assert_eq!(AboutPage.render().to_string(), AboutPage.render().to_string());
}

#[test]
fn single_heading() {
    let doc = AboutPage.render();
    assert_eq!(doc.headings().collect::<Vec<_>>(), vec!["About me"]);
    assert!(matches!(&doc.blocks()[0], Block::Heading { level: 1, text } if text == "About me"));

    let html = render::html(&doc);
    assert_eq!(html.matches("<h1>").count(), 1);
    assert!(html.starts_with("<h1>About me</h1>\n<article>\n"));
}

#[test]
fn eight_prose_paragraphs_then_signature() {
    let doc = AboutPage.render();
    let kinds: Vec<&str> = doc
        .blocks()
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::LineBreakSeparatedText(_) => "lines",
        })
        .collect();
    let mut expected = vec!["heading"];
    expected.extend(std::iter::repeat_n("paragraph", 8));
    expected.push("lines");
    assert_eq!(kinds, expected);

    // The signature is a paragraph in the markup, so the article holds nine.
    let html = render::html(&doc);
    assert_eq!(html.matches("<p>").count(), 9);
    assert!(html.ends_with("</p>\n</article>\n"));
}

#[test]
fn wikipedia_link() {
    let doc = AboutPage.render();
    let Block::Paragraph(first) = &doc.blocks()[1] else {
        panic!("second block should be a paragraph");
    };
    assert_eq!(
        first[1],
        Inline::link("https://en.wikipedia.org/wiki/Rio_de_Janeiro", "Rio de Janeiro")
    );
    assert!(
        render::html(&doc)
            .contains("<a href=\"https://en.wikipedia.org/wiki/Rio_de_Janeiro\">Rio de Janeiro</a>")
    );
}

#[test]
fn contact_links() {
    let doc = AboutPage.render();
    let Block::Paragraph(contact) = &doc.blocks()[8] else {
        panic!("contact block should be a paragraph");
    };
    let links: Vec<_> = contact
        .iter()
        .filter(|i| matches!(i, Inline::Link { .. }))
        .cloned()
        .collect();
    assert_eq!(
        links,
        vec![
            Inline::link("https://x.com/itsjovi_dev", "X"),
            Inline::link("mailto:costajoao255@gmail.com", "costajoao255@gmail.com"),
        ]
    );

    let html = render::html(&doc);
    assert!(html.contains("<a href=\"https://x.com/itsjovi_dev\">X</a>"));
    assert!(html.contains(
        "<a href=\"mailto:costajoao255@gmail.com\">costajoao255@gmail.com</a>"
    ));
}

#[test]
fn every_link_in_the_page() {
    let doc = AboutPage.render();
    assert_eq!(
        doc.links().collect::<Vec<_>>(),
        vec![
            ("https://en.wikipedia.org/wiki/Rio_de_Janeiro", "Rio de Janeiro"),
            ("https://x.com/itsjovi_dev", "X"),
            ("mailto:costajoao255@gmail.com", "costajoao255@gmail.com"),
        ]
    );
    assert!(doc.validate().is_ok());
}

#[test]
fn signature_block() {
    let doc = AboutPage.render();
    assert_eq!(doc.blocks().last(), Some(&Block::lines(["Best,", "João"])));
    assert!(render::html(&doc).contains("<p>Best,<br />\nJoão</p>"));
    assert!(doc.to_string().ends_with("Best,\\\nJoão\n"));
}

#[test]
fn mounted_under_about() {
    let page = pages::find("/about").expect("about page is mounted");
    assert_eq!(page.title(), "About me");
    assert_eq!(page.render(), site::pages::about::about());
}

#[test]
fn markdown_source_reads_back() {
    let doc = AboutPage.render();
    let parsed = Parser::new(doc.to_string(), 0).parse().expect("page markdown parses");
    assert!(parsed.warnings.is_empty());
    assert_eq!(parsed.document, doc);
}

#[test]
fn renders_from_many_threads() {
    let expected = render::html(&AboutPage.render());
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| render::html(&AboutPage.render())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
