//! Structured extraction from ADVA AOS `<rpc-reply>` documents.
//!
//! The facility subtree nests one sub-record per interface kind
//! (`ethernet-interface`, `otn-interface`, ...) under each `interface`
//! element, and the `user-label` lives on the sub-record. The parser is
//! a depth-tracking event loop so unknown siblings and vendor
//! extensions pass through untouched.

use portsync_core::DeviceInterface;
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use tracing::debug;

use crate::FACILITY_NS;
use crate::error::Error;

/// Parse every facility interface out of a `<get-config>` reply.
///
/// Interfaces without a `name` element (or with an empty one) are kept
/// with `name: None` so callers can count what they skipped. Labels are
/// collected per sub-record in document order; a sub-record without a
/// `user-label` contributes an empty string, matching what the device
/// reports for unlabelled ports.
pub fn parse_interfaces(xml: &str) -> Result<Vec<DeviceInterface>, Error> {
    let mut reader = NsReader::from_str(xml);
    let mut parser = InterfaceParser::default();

    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Eof => break,
            Event::Start(e) => {
                parser.depth += 1;
                let (ns, local) = reader.resolve_element(e.name());
                parser.on_start(is_facility(&ns), local.as_ref());
            }
            Event::Empty(e) => {
                parser.depth += 1;
                let (ns, local) = reader.resolve_element(e.name());
                parser.on_start(is_facility(&ns), local.as_ref());
                parser.on_end();
                parser.depth -= 1;
            }
            Event::End(_) => {
                parser.on_end();
                parser.depth -= 1;
            }
            Event::Text(t) => {
                if parser.capture.is_some() {
                    let text = t.unescape().map_err(xml_err)?;
                    parser.on_text(&text);
                }
            }
            _ => {}
        }
    }

    debug!(interfaces = parser.out.len(), "parsed facility subtree");
    Ok(parser.out)
}

/// Pull the first `<rpc-error>` out of a reply, if any.
///
/// Returns `(error-tag, error-message)`, either of which may be empty
/// when the device omits it.
pub(crate) fn extract_rpc_error(xml: &str) -> Result<Option<(String, String)>, Error> {
    let mut reader = NsReader::from_str(xml);
    let mut in_error = false;
    let mut field = None;
    let mut tag = String::new();
    let mut message = String::new();

    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Eof => break,
            Event::Start(e) => match e.local_name().as_ref() {
                b"rpc-error" => in_error = true,
                b"error-tag" if in_error => field = Some(ErrField::Tag),
                b"error-message" if in_error => field = Some(ErrField::Message),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"rpc-error" if in_error => {
                    return Ok(Some((tag.trim().to_owned(), message.trim().to_owned())));
                }
                b"error-tag" | b"error-message" => field = None,
                _ => {}
            },
            Event::Text(t) => {
                let text = t.unescape().map_err(xml_err)?;
                match field {
                    Some(ErrField::Tag) => tag.push_str(&text),
                    Some(ErrField::Message) => message.push_str(&text),
                    None => {}
                }
            }
            _ => {}
        }
    }

    Ok(None)
}

#[derive(Clone, Copy)]
enum ErrField {
    Tag,
    Message,
}

fn xml_err(e: impl std::fmt::Display) -> Error {
    Error::Xml {
        reason: e.to_string(),
    }
}

fn is_facility(ns: &ResolveResult<'_>) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(n)) if *n == FACILITY_NS.as_bytes())
}

#[derive(Default)]
struct InterfaceParser {
    depth: usize,
    iface: Option<IfaceState>,
    sub: Option<SubState>,
    capture: Option<CaptureState>,
    out: Vec<DeviceInterface>,
}

struct IfaceState {
    depth: usize,
    name: Option<String>,
    labels: Vec<String>,
}

struct SubState {
    depth: usize,
    label: Option<String>,
}

struct CaptureState {
    target: Target,
    depth: usize,
    text: String,
}

enum Target {
    Name,
    Label,
}

impl InterfaceParser {
    fn on_start(&mut self, facility: bool, local: &[u8]) {
        let Some(iface) = &self.iface else {
            if facility && local == b"interface" {
                self.iface = Some(IfaceState {
                    depth: self.depth,
                    name: None,
                    labels: Vec::new(),
                });
            }
            return;
        };

        match &self.sub {
            None if self.depth == iface.depth + 1 => {
                if facility && local == b"name" {
                    self.capture = Some(CaptureState {
                        target: Target::Name,
                        depth: self.depth,
                        text: String::new(),
                    });
                } else if local.ends_with(b"-interface") {
                    self.sub = Some(SubState {
                        depth: self.depth,
                        label: None,
                    });
                }
            }
            Some(sub) if self.depth == sub.depth + 1 => {
                if facility && local == b"user-label" {
                    self.capture = Some(CaptureState {
                        target: Target::Label,
                        depth: self.depth,
                        text: String::new(),
                    });
                }
            }
            _ => {}
        }
    }

    fn on_text(&mut self, text: &str) {
        if let Some(capture) = &mut self.capture {
            capture.text.push_str(text);
        }
    }

    fn on_end(&mut self) {
        if let Some(capture) = self.capture.take() {
            if capture.depth == self.depth {
                match capture.target {
                    Target::Name => {
                        if let Some(iface) = &mut self.iface {
                            iface.name = (!capture.text.is_empty()).then_some(capture.text);
                        }
                    }
                    Target::Label => {
                        if let Some(sub) = &mut self.sub {
                            sub.label = Some(capture.text);
                        }
                    }
                }
            } else {
                // End of an element nested below the captured one.
                self.capture = Some(capture);
            }
        }

        if self.sub.as_ref().is_some_and(|s| s.depth == self.depth) {
            if let (Some(sub), Some(iface)) = (self.sub.take(), &mut self.iface) {
                iface.labels.push(sub.label.unwrap_or_default());
            }
        }

        if self.iface.as_ref().is_some_and(|i| i.depth == self.depth) {
            if let Some(iface) = self.iface.take() {
                self.out.push(DeviceInterface {
                    name: iface.name,
                    labels: iface.labels,
                });
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FACILITY: &str = "http://www.advaoptical.com/aos/netconf/aos-core-facility";
    const ME: &str = "http://www.advaoptical.com/aos/netconf/aos-core-managed-element";

    fn reply(body: &str) -> String {
        format!(
            "<rpc-reply xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\" message-id=\"2\">\
             <data><managed-element xmlns=\"{ME}\">{body}</managed-element></data></rpc-reply>"
        )
    }

    fn iface(body: &str) -> String {
        format!("<interface xmlns=\"{FACILITY}\">{body}</interface>")
    }

    #[test]
    fn extracts_names_and_labels() {
        let xml = reply(&format!(
            "{}{}",
            iface(
                "<name>1/1/n1</name>\
                 <ethernet-interface><user-label>core uplink</user-label></ethernet-interface>"
            ),
            iface(
                "<name>1/1/c1</name>\
                 <otn-interface><user-label>to-fra-01</user-label></otn-interface>"
            ),
        ));

        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(
            parsed,
            vec![
                DeviceInterface {
                    name: Some("1/1/n1".into()),
                    labels: vec!["core uplink".into()],
                },
                DeviceInterface {
                    name: Some("1/1/c1".into()),
                    labels: vec!["to-fra-01".into()],
                },
            ]
        );
    }

    #[test]
    fn interface_without_name_is_kept_as_nameless() {
        let xml = reply(&iface(
            "<ethernet-interface><user-label>orphan</user-label></ethernet-interface>",
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, None);
        assert_eq!(parsed[0].labels, vec!["orphan".to_owned()]);
    }

    #[test]
    fn empty_name_element_counts_as_nameless() {
        let xml = reply(&iface("<name/>"));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed[0].name, None);
    }

    #[test]
    fn multiple_sub_records_collect_labels_in_order() {
        let xml = reply(&iface(
            "<name>1/1/n2</name>\
             <ethernet-interface><user-label>first</user-label></ethernet-interface>\
             <otn-interface><user-label>second</user-label></otn-interface>",
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(
            parsed[0].labels,
            vec!["first".to_owned(), "second".to_owned()]
        );
    }

    #[test]
    fn sub_record_without_label_contributes_empty_string() {
        let xml = reply(&iface(
            "<name>1/2/n1</name><ethernet-interface><admin-state>in-service</admin-state>\
             </ethernet-interface>",
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed[0].labels, vec![String::new()]);
    }

    #[test]
    fn whitespace_labels_survive_untrimmed() {
        let xml = reply(&iface(
            "<name>1/2/n2</name>\
             <ethernet-interface><user-label>  padded  </user-label></ethernet-interface>",
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed[0].labels, vec!["  padded  ".to_owned()]);
    }

    #[test]
    fn foreign_namespace_elements_are_ignored() {
        let xml = reply(&format!(
            "<interface xmlns=\"urn:example:other\">\
             <name>ghost</name></interface>\
             {}",
            iface(
                "<name xmlns=\"urn:example:other\">wrong</name>\
                 <name>1/3/n1</name>\
                 <lldp-config><user-label>not-a-sub-record</user-label></lldp-config>\
                 <ethernet-interface><user-label>real</user-label></ethernet-interface>"
            ),
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name.as_deref(), Some("1/3/n1"));
        assert_eq!(parsed[0].labels, vec!["real".to_owned()]);
    }

    #[test]
    fn nested_label_elements_do_not_leak_between_sub_records() {
        // user-label must be a direct child of the sub-record
        let xml = reply(&iface(
            "<name>1/4/n1</name>\
             <ethernet-interface><nested><user-label>deep</user-label></nested>\
             </ethernet-interface>",
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed[0].labels, vec![String::new()]);
    }

    #[test]
    fn pretty_printed_document_parses_the_same() {
        let xml = reply(&format!(
            "\n  <interface xmlns=\"{FACILITY}\">\n    <name>1/5/n1</name>\n    \
             <ethernet-interface>\n      <user-label>spaced</user-label>\n    \
             </ethernet-interface>\n  </interface>\n"
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed[0].name.as_deref(), Some("1/5/n1"));
        assert_eq!(parsed[0].labels, vec!["spaced".to_owned()]);
    }

    #[test]
    fn escaped_entities_are_unescaped() {
        let xml = reply(&iface(
            "<name>1/6/n1</name>\
             <ethernet-interface><user-label>A &amp; B &lt;10G&gt;</user-label>\
             </ethernet-interface>",
        ));
        let parsed = parse_interfaces(&xml).unwrap();
        assert_eq!(parsed[0].labels, vec!["A & B <10G>".to_owned()]);
    }

    #[test]
    fn rpc_error_is_extracted() {
        let xml = "<rpc-reply xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\" \
                   message-id=\"3\"><rpc-error>\
                   <error-type>application</error-type>\
                   <error-tag>operation-failed</error-tag>\
                   <error-severity>error</error-severity>\
                   <error-message>\n    filter not supported\n  </error-message>\
                   </rpc-error></rpc-reply>";
        let err = extract_rpc_error(xml).unwrap();
        assert_eq!(
            err,
            Some(("operation-failed".into(), "filter not supported".into()))
        );
    }

    #[test]
    fn ok_reply_has_no_rpc_error() {
        let xml = reply(&iface("<name>1/1/n1</name>"));
        assert_eq!(extract_rpc_error(&xml).unwrap(), None);
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let err = parse_interfaces("<rpc-reply><data>").unwrap_err();
        assert!(matches!(err, Error::Xml { .. }));
    }
}
