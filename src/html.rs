// complete.html → complete.txt

use std::path::PathBuf;

use anyhow::Result;
use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{info, warn};

use crate::{
    corpus::{CorpusSource, CorpusWriter, PoemFiles, DEFAULT_SOURCE_FILE},
    poem::Poem,
};

const INVISIBLE_ELEMENTS: [&str; 3] = ["head", "script", "style"];
const BLOCK_ELEMENTS: [&str; 11] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr", "blockquote",
];

fn collect_text(handle: &Handle, text: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        NodeData::Element { name, .. } => {
            let tag = &*name.local;
            if INVISIBLE_ELEMENTS.contains(&tag) {
                return;
            }
            if tag == "br" {
                text.push('\n');
                return;
            }

            for child in handle.children.borrow().iter() {
                collect_text(child, text);
            }
            if BLOCK_ELEMENTS.contains(&tag) {
                text.push('\n');
            }
        }
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_text(child, text);
            }
        }
        // コメント, doctype など
        _ => {}
    }
}

// 文字参照の展開は html5ever に任せる
pub fn extract_text(html: &str) -> String {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let mut text = String::new();
    collect_text(&dom.document, &mut text);

    text.lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

pub fn convert_poem(source: &mut dyn CorpusSource, writer: &CorpusWriter, poem: Poem) -> Result<Option<PathBuf>> {
    let files = PoemFiles::of(poem);
    let html_path = files.html_source();

    if !source.exists(&html_path) {
        warn!("{} has no HTML source, skipped", poem);
        return Ok(None);
    }

    let html = source.read_text(&html_path)?;
    let path = writer.write(&files.source(DEFAULT_SOURCE_FILE), &extract_text(&html))?;
    info!("text of {} extracted to {}", poem, path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lines_from_markup() {
        let html = "<html><head><title>Völuspá</title></head><body>\
                    <h1>Völuspá</h1><p>1.<br>Hljóðs bið ek allar<br/>\
                    helgar kindir,</p><script>var x = 1;</script></body></html>";

        assert_eq!(
            extract_text(html),
            "Völuspá\n1.\nHljóðs bið ek allar\nhelgar kindir,"
        );
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(
            extract_text("&THORN;at &amp; &#240;&#x00F6;gur &unknown;"),
            "Þat & ðögur &unknown;"
        );
    }

    #[test]
    fn decodes_every_named_entity() {
        assert_eq!(
            extract_text("<p>&laquo;Hvat&raquo; kva&eth; hann &hellip; &uuml;</p>"),
            "«Hvat» kvað hann … ü"
        );
    }

    #[test]
    fn drops_comments() {
        assert_eq!(extract_text("a<!-- note -->b"), "ab");
    }
}
