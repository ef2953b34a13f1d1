//! SSF formatter
//!
//! Writes a validated tree back out as SSF text. Reading the output again gives a
//! tree with the same content. Feature values are always written single-quoted.
//!
//! One SSF text holds either wrapped documents or a single loose document: a
//! reader only falls back to loose reading when no `<document>` block is present.
//! Corpora that mix the two, or hold several loose documents, are refused.

use super::registry::{FormatError, Formatter};
use crate::ssf::ast::{Chunk, ChunkItem, Corpus, Document, Sentence};
use crate::ssf::lexing::{CLOSE_MARKER, OPEN_MARKER};

pub fn to_ssf_string(corpus: &Corpus) -> Result<String, FormatError> {
    check_single_text(corpus)?;

    let mut output = String::new();
    for document in corpus.documents() {
        write_document(&mut output, document);
    }
    Ok(output)
}

fn check_single_text(corpus: &Corpus) -> Result<(), FormatError> {
    let loose = corpus.documents().iter().filter(|d| d.is_loose()).count();
    let wrapped = corpus.documents().len() - loose;
    if loose > 1 || (loose == 1 && wrapped > 0) {
        return Err(FormatError::SerializationError(format!(
            "{} loose and {} wrapped documents cannot share one SSF text",
            loose, wrapped
        )));
    }
    Ok(())
}

fn write_document(output: &mut String, document: &Document) {
    match document.id() {
        Some(id) => {
            output.push_str(&format!("<document id=\"{}\">\n", id));
            for sentence in document.sentences() {
                write_sentence(output, sentence);
            }
            output.push_str("</document>\n");
        }
        None => {
            for sentence in document.sentences() {
                write_sentence(output, sentence);
            }
        }
    }
}

fn write_sentence(output: &mut String, sentence: &Sentence) {
    output.push_str(&format!("<Sentence id=\"{}\">\n", sentence.id()));
    for chunk in sentence.outer_chunks() {
        write_chunk(output, chunk);
    }
    output.push_str("</Sentence>\n");
}

fn write_chunk(output: &mut String, chunk: &Chunk) {
    let mut header = format!("{}\t{}\t{}", chunk.number(), OPEN_MARKER, chunk.tag());
    if !chunk.features().is_empty() {
        header.push_str(&format!("\t{}", chunk.features()));
    }
    output.push_str(&header);
    output.push('\n');

    for child in chunk.children() {
        match child {
            ChunkItem::Token(token) => {
                output.push_str(&token.to_ssf_line());
                output.push('\n');
            }
            ChunkItem::Chunk(nested) => write_chunk(output, nested),
        }
    }
    output.push_str(&format!("\t{}\n", CLOSE_MARKER));
}

pub struct SsfFormatter;

impl Formatter for SsfFormatter {
    fn name(&self) -> &str {
        "ssf"
    }

    fn serialize(&self, corpus: &Corpus) -> Result<String, FormatError> {
        to_ssf_string(corpus)
    }

    fn description(&self) -> &str {
        "The validated tree written back as SSF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssf::ast::IdGenerator;
    use crate::ssf::parsing::{parse_corpus, parse_text, CorpusMode, SourceFile};

    #[test]
    fn test_writes_wrapped_document() {
        let text = "<document id=\"d1\">\n<Sentence id=\"1\">\n0\t((\tSSF\n1\t((\tNP\t<fs name='NP'>\n1.1\tdog\tNN\t<fs af=dog,n>\n\t))\n\t))\n</Sentence>\n</document>";
        let corpus = parse_text(text, "mem", CorpusMode::Lax);
        assert_eq!(
            to_ssf_string(&corpus).unwrap(),
            "<document id=\"d1\">\n<Sentence id=\"1\">\n1\t((\tNP\t<fs name='NP'>\n1.1\tdog\tNN\t<fs af='dog,n'>\n\t))\n</Sentence>\n</document>\n"
        );
    }

    #[test]
    fn test_output_parses_to_same_tree() {
        let text = "<Sentence id=\"s\">\n1\t((\tNP\n1.1\tthe\tDT\n1.2\t((\tJJP\t<fs name=\"JJP\">\n1.2.1\tbig\tJJ\t<fs af='big,adj' x='1'>|<fs y='2'>\n\t))\n\t))\n</Sentence>";
        let first = parse_text(text, "mem", CorpusMode::Lax);
        let second = parse_text(&to_ssf_string(&first).unwrap(), "mem", CorpusMode::Lax);
        assert!(first.same_content(&second));
        assert!(!first.is_empty());
    }

    #[test]
    fn test_mixed_loose_and_wrapped_is_refused() {
        let ids = IdGenerator::new();
        let sentence = "<Sentence id=\"1\">\n1\t((\tNP\n1.1\tdog\tNN\n\t))\n</Sentence>\n";
        let sources = [
            SourceFile::new("a.ssf", format!("<document id=\"d1\">\n{}</document>\n", sentence)),
            SourceFile::new("b.ssf", sentence),
        ];
        let corpus = parse_corpus("mem", sources, CorpusMode::Lax, &ids);
        assert_eq!(corpus.documents().len(), 2);

        let err = to_ssf_string(&corpus).unwrap_err();
        assert!(matches!(err, FormatError::SerializationError(_)), "{:?}", err);
    }

    #[test]
    fn test_two_loose_documents_are_refused() {
        let ids = IdGenerator::new();
        let sentence = "<Sentence id=\"1\">\n1\t((\tNP\n1.1\tdog\tNN\n\t))\n</Sentence>\n";
        let sources = [SourceFile::new("a.ssf", sentence), SourceFile::new("b.ssf", sentence)];
        let corpus = parse_corpus("mem", sources, CorpusMode::Lax, &ids);
        assert!(to_ssf_string(&corpus).is_err());
    }
}
