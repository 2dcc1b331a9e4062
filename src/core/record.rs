use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Record types that carry a single target value. Anything else is
/// rejected at construction instead of being passed through by name.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    TXT,
    NS,
    PTR,
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "NS" => Ok(RecordType::NS),
            "PTR" => Ok(RecordType::PTR),
            _ => Err(Error::UnknownRecordType(tag.to_string())),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
        };
        write!(f, "{tag}")
    }
}

/// Opaque tokens understood by the downstream provider integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordModifier {
    CloudflareProxyOn,
    CloudflareProxyOff,
}

impl fmt::Display for RecordModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            RecordModifier::CloudflareProxyOn => "CF_PROXY_ON",
            RecordModifier::CloudflareProxyOff => "CF_PROXY_OFF",
        };
        write!(f, "{token}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub record_type: RecordType,
    pub name: String,
    pub target: String,
    pub modifiers: Vec<RecordModifier>,
}

impl Record {
    /// Build a record from a raw type tag, validating the tag against
    /// the supported set.
    pub fn new(
        tag: &str,
        name: &str,
        target: &str,
        modifiers: Vec<RecordModifier>,
    ) -> Result<Self, Error> {
        Ok(Record {
            record_type: tag.parse()?,
            name: name.to_string(),
            target: target.to_string(),
            modifiers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_known_tags() {
        for tag in ["A", "AAAA", "CNAME", "TXT", "NS", "PTR"] {
            let parsed: RecordType = tag.parse().unwrap();
            assert_eq!(parsed.to_string(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = RecordType::from_str("MX");
        assert_matches!(result, Err(Error::UnknownRecordType(tag)) if tag == "MX");
    }

    #[test]
    fn test_lowercase_tag_rejected() {
        assert_matches!("a".parse::<RecordType>(), Err(Error::UnknownRecordType(_)));
    }

    #[test]
    fn test_new_validates_tag() {
        let rec = Record::new("A", "@", "1.2.3.4", vec![]).unwrap();
        assert_eq!(rec.record_type, RecordType::A);
        assert_eq!(rec.name, "@");
        assert_eq!(rec.target, "1.2.3.4");
        assert!(rec.modifiers.is_empty());

        assert!(Record::new("ALIAS", "@", "example.net.", vec![]).is_err());
    }

    #[test]
    fn test_modifier_tokens() {
        assert_eq!(RecordModifier::CloudflareProxyOn.to_string(), "CF_PROXY_ON");
        assert_eq!(
            RecordModifier::CloudflareProxyOff.to_string(),
            "CF_PROXY_OFF"
        );
    }
}
