use crate::document::{Block, Document, Inline};
use crate::pages::Page;

pub const WIKIPEDIA_RIO: &str = "https://en.wikipedia.org/wiki/Rio_de_Janeiro";
pub const X_PROFILE: &str = "https://x.com/itsjovi_dev";
pub const EMAIL: &str = "costajoao255@gmail.com";
pub const MAILTO: &str = "mailto:costajoao255@gmail.com";

/// The "About me" page, mounted at `/about`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AboutPage;

impl Page for AboutPage {
    fn route(&self) -> &'static str {
        "about"
    }

    fn title(&self) -> &'static str {
        "About me"
    }

    fn render(&self) -> Document {
        about()
    }
}

/// Build the "About me" document. Takes no input and cannot fail.
pub fn about() -> Document {
    Document::new(vec![
        Block::heading("About me"),
        Block::paragraph(vec![
            Inline::text("I was born and raised in "),
            Inline::link(WIKIPEDIA_RIO, "Rio de Janeiro"),
            Inline::text(" —still here for now, but dreaming of becoming a digital nomad."),
        ]),
        prose(
            "My coding journey began in high school with a simple program that sparked my \
             passion. Since then, I’ve focused on frontend development while gradually \
             expanding into backend and DevOps to grow as a generalist.",
        ),
        prose(
            "Outside of work, I'm probably playing chess, learning a new language, \
             practicing volleyball, dancing terribly but confidently, or hanging out with \
             friends.",
        ),
        prose(
            "Professionally, I started at NFHub, where I helped build a tool that empowers \
             employees to safely raise sensitive issues within companies. Creating something \
             with real impact—and seeing it work in the real world—reminded me why I love \
             what I do.",
        ),
        prose(
            "Later I've helped modernize legacy systems and bring new products to life. At \
             Cibernix, I was part of a small team transforming an old platform into something \
             faster, safer, and more reliable. That's where I discovered how much I care about \
             clean design, stability, and user trust.",
        ),
        prose(
            "I've also played around with the backend, building a Todo API with GraphQL, Koa, \
             and Mongoose to sharpen my TypeScript and testing skills. These days, I'm deep \
             into learning cloud and infrastructure—prepping for my AWS Developer Associate \
             certification and exploring how to build scalable systems that don't break \
             under pressure.",
        ),
        prose(
            "I believe good software feels natural, solves a real need, and respects the \
             person using it. Whether it's squashing bugs, mentoring a teammate, or deploying \
             a more secure login flow, I try to build with care.",
        ),
        Block::paragraph(vec![
            Inline::text("If you want to get in touch, send me a DM on "),
            Inline::link(X_PROFILE, "X"),
            Inline::text(" or an email "),
            Inline::link(MAILTO, EMAIL),
            Inline::text("."),
        ]),
        Block::lines(["Best,", "João"]),
    ])
}

fn prose(text: &str) -> Block {
    Block::paragraph(vec![Inline::text(text)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_block_order() {
        let doc = about();
        let blocks = doc.blocks();
        assert_eq!(blocks.len(), 10);
        assert_eq!(blocks[0], Block::heading("About me"));
        assert!(blocks[1..9].iter().all(|b| matches!(b, Block::Paragraph(_))));
        assert_eq!(blocks[9], Block::lines(["Best,", "João"]));
    }

    #[test]
    fn every_paragraph_mentions_its_topic() {
        let doc = about();
        let text: Vec<String> = doc
            .paragraphs()
            .map(|inlines| inlines.iter().map(|i| i.to_string()).collect())
            .collect();
        let topics = [
            "Rio de Janeiro",
            "high school",
            "chess",
            "NFHub",
            "Cibernix",
            "GraphQL, Koa, and Mongoose",
            "good software",
            "get in touch",
        ];
        for (paragraph, topic) in text.iter().zip(topics) {
            assert!(paragraph.contains(topic), "{paragraph:?} should mention {topic:?}");
        }
        assert!(text[2].contains("volleyball") && text[2].contains("dancing"));
        assert_eq!(text.len(), 8);
        assert!(text[5].contains("AWS Developer Associate"));
    }

    #[test]
    fn page_metadata() {
        assert_eq!(AboutPage.route(), "about");
        assert_eq!(AboutPage.title(), "About me");
        assert_eq!(AboutPage.render(), about());
    }
}
