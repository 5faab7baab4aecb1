//! Built-in table of named character references (HTML 4 entity set)

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::utils::ENTITY_COUNT;

/// One named reference and the character it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRecord {
    pub name: &'static str,
    pub codepoint: char,
}

impl EntityRecord {
    const fn new(name: &'static str, codepoint: char) -> Self {
        Self { name, codepoint }
    }

    /// `&name;`
    #[must_use]
    pub fn named(&self) -> String {
        format!("&{};", self.name)
    }

    /// `&#N;`
    #[must_use]
    pub fn numeric(&self) -> String {
        format!("&#{};", u32::from(self.codepoint))
    }
}

pub static ENTITIES: [EntityRecord; ENTITY_COUNT] = [
    EntityRecord::new("nbsp", '\u{00A0}'),
    EntityRecord::new("iexcl", '\u{00A1}'),
    EntityRecord::new("cent", '\u{00A2}'),
    EntityRecord::new("pound", '\u{00A3}'),
    EntityRecord::new("curren", '\u{00A4}'),
    EntityRecord::new("yen", '\u{00A5}'),
    EntityRecord::new("brvbar", '\u{00A6}'),
    EntityRecord::new("sect", '\u{00A7}'),
    EntityRecord::new("uml", '\u{00A8}'),
    EntityRecord::new("copy", '\u{00A9}'),
    EntityRecord::new("ordf", '\u{00AA}'),
    EntityRecord::new("laquo", '\u{00AB}'),
    EntityRecord::new("not", '\u{00AC}'),
    EntityRecord::new("shy", '\u{00AD}'),
    EntityRecord::new("reg", '\u{00AE}'),
    EntityRecord::new("macr", '\u{00AF}'),
    EntityRecord::new("deg", '\u{00B0}'),
    EntityRecord::new("plusmn", '\u{00B1}'),
    EntityRecord::new("sup2", '\u{00B2}'),
    EntityRecord::new("sup3", '\u{00B3}'),
    EntityRecord::new("acute", '\u{00B4}'),
    EntityRecord::new("micro", '\u{00B5}'),
    EntityRecord::new("para", '\u{00B6}'),
    EntityRecord::new("middot", '\u{00B7}'),
    EntityRecord::new("cedil", '\u{00B8}'),
    EntityRecord::new("sup1", '\u{00B9}'),
    EntityRecord::new("ordm", '\u{00BA}'),
    EntityRecord::new("raquo", '\u{00BB}'),
    EntityRecord::new("frac14", '\u{00BC}'),
    EntityRecord::new("frac12", '\u{00BD}'),
    EntityRecord::new("frac34", '\u{00BE}'),
    EntityRecord::new("iquest", '\u{00BF}'),
    EntityRecord::new("Agrave", '\u{00C0}'),
    EntityRecord::new("Aacute", '\u{00C1}'),
    EntityRecord::new("Acirc", '\u{00C2}'),
    EntityRecord::new("Atilde", '\u{00C3}'),
    EntityRecord::new("Auml", '\u{00C4}'),
    EntityRecord::new("Aring", '\u{00C5}'),
    EntityRecord::new("AElig", '\u{00C6}'),
    EntityRecord::new("Ccedil", '\u{00C7}'),
    EntityRecord::new("Egrave", '\u{00C8}'),
    EntityRecord::new("Eacute", '\u{00C9}'),
    EntityRecord::new("Ecirc", '\u{00CA}'),
    EntityRecord::new("Euml", '\u{00CB}'),
    EntityRecord::new("Igrave", '\u{00CC}'),
    EntityRecord::new("Iacute", '\u{00CD}'),
    EntityRecord::new("Icirc", '\u{00CE}'),
    EntityRecord::new("Iuml", '\u{00CF}'),
    EntityRecord::new("ETH", '\u{00D0}'),
    EntityRecord::new("Ntilde", '\u{00D1}'),
    EntityRecord::new("Ograve", '\u{00D2}'),
    EntityRecord::new("Oacute", '\u{00D3}'),
    EntityRecord::new("Ocirc", '\u{00D4}'),
    EntityRecord::new("Otilde", '\u{00D5}'),
    EntityRecord::new("Ouml", '\u{00D6}'),
    EntityRecord::new("times", '\u{00D7}'),
    EntityRecord::new("Oslash", '\u{00D8}'),
    EntityRecord::new("Ugrave", '\u{00D9}'),
    EntityRecord::new("Uacute", '\u{00DA}'),
    EntityRecord::new("Ucirc", '\u{00DB}'),
    EntityRecord::new("Uuml", '\u{00DC}'),
    EntityRecord::new("Yacute", '\u{00DD}'),
    EntityRecord::new("THORN", '\u{00DE}'),
    EntityRecord::new("szlig", '\u{00DF}'),
    EntityRecord::new("agrave", '\u{00E0}'),
    EntityRecord::new("aacute", '\u{00E1}'),
    EntityRecord::new("acirc", '\u{00E2}'),
    EntityRecord::new("atilde", '\u{00E3}'),
    EntityRecord::new("auml", '\u{00E4}'),
    EntityRecord::new("aring", '\u{00E5}'),
    EntityRecord::new("aelig", '\u{00E6}'),
    EntityRecord::new("ccedil", '\u{00E7}'),
    EntityRecord::new("egrave", '\u{00E8}'),
    EntityRecord::new("eacute", '\u{00E9}'),
    EntityRecord::new("ecirc", '\u{00EA}'),
    EntityRecord::new("euml", '\u{00EB}'),
    EntityRecord::new("igrave", '\u{00EC}'),
    EntityRecord::new("iacute", '\u{00ED}'),
    EntityRecord::new("icirc", '\u{00EE}'),
    EntityRecord::new("iuml", '\u{00EF}'),
    EntityRecord::new("eth", '\u{00F0}'),
    EntityRecord::new("ntilde", '\u{00F1}'),
    EntityRecord::new("ograve", '\u{00F2}'),
    EntityRecord::new("oacute", '\u{00F3}'),
    EntityRecord::new("ocirc", '\u{00F4}'),
    EntityRecord::new("otilde", '\u{00F5}'),
    EntityRecord::new("ouml", '\u{00F6}'),
    EntityRecord::new("divide", '\u{00F7}'),
    EntityRecord::new("oslash", '\u{00F8}'),
    EntityRecord::new("ugrave", '\u{00F9}'),
    EntityRecord::new("uacute", '\u{00FA}'),
    EntityRecord::new("ucirc", '\u{00FB}'),
    EntityRecord::new("uuml", '\u{00FC}'),
    EntityRecord::new("yacute", '\u{00FD}'),
    EntityRecord::new("thorn", '\u{00FE}'),
    EntityRecord::new("yuml", '\u{00FF}'),
    EntityRecord::new("fnof", '\u{0192}'),
    EntityRecord::new("Alpha", '\u{0391}'),
    EntityRecord::new("Beta", '\u{0392}'),
    EntityRecord::new("Gamma", '\u{0393}'),
    EntityRecord::new("Delta", '\u{0394}'),
    EntityRecord::new("Epsilon", '\u{0395}'),
    EntityRecord::new("Zeta", '\u{0396}'),
    EntityRecord::new("Eta", '\u{0397}'),
    EntityRecord::new("Theta", '\u{0398}'),
    EntityRecord::new("Iota", '\u{0399}'),
    EntityRecord::new("Kappa", '\u{039A}'),
    EntityRecord::new("Lambda", '\u{039B}'),
    EntityRecord::new("Mu", '\u{039C}'),
    EntityRecord::new("Nu", '\u{039D}'),
    EntityRecord::new("Xi", '\u{039E}'),
    EntityRecord::new("Omicron", '\u{039F}'),
    EntityRecord::new("Pi", '\u{03A0}'),
    EntityRecord::new("Rho", '\u{03A1}'),
    EntityRecord::new("Sigma", '\u{03A3}'),
    EntityRecord::new("Tau", '\u{03A4}'),
    EntityRecord::new("Upsilon", '\u{03A5}'),
    EntityRecord::new("Phi", '\u{03A6}'),
    EntityRecord::new("Chi", '\u{03A7}'),
    EntityRecord::new("Psi", '\u{03A8}'),
    EntityRecord::new("Omega", '\u{03A9}'),
    EntityRecord::new("alpha", '\u{03B1}'),
    EntityRecord::new("beta", '\u{03B2}'),
    EntityRecord::new("gamma", '\u{03B3}'),
    EntityRecord::new("delta", '\u{03B4}'),
    EntityRecord::new("epsilon", '\u{03B5}'),
    EntityRecord::new("zeta", '\u{03B6}'),
    EntityRecord::new("eta", '\u{03B7}'),
    EntityRecord::new("theta", '\u{03B8}'),
    EntityRecord::new("iota", '\u{03B9}'),
    EntityRecord::new("kappa", '\u{03BA}'),
    EntityRecord::new("lambda", '\u{03BB}'),
    EntityRecord::new("mu", '\u{03BC}'),
    EntityRecord::new("nu", '\u{03BD}'),
    EntityRecord::new("xi", '\u{03BE}'),
    EntityRecord::new("omicron", '\u{03BF}'),
    EntityRecord::new("pi", '\u{03C0}'),
    EntityRecord::new("rho", '\u{03C1}'),
    EntityRecord::new("sigmaf", '\u{03C2}'),
    EntityRecord::new("sigma", '\u{03C3}'),
    EntityRecord::new("tau", '\u{03C4}'),
    EntityRecord::new("upsilon", '\u{03C5}'),
    EntityRecord::new("phi", '\u{03C6}'),
    EntityRecord::new("chi", '\u{03C7}'),
    EntityRecord::new("psi", '\u{03C8}'),
    EntityRecord::new("omega", '\u{03C9}'),
    EntityRecord::new("thetasym", '\u{03D1}'),
    EntityRecord::new("upsih", '\u{03D2}'),
    EntityRecord::new("piv", '\u{03D6}'),
    EntityRecord::new("bull", '\u{2022}'),
    EntityRecord::new("hellip", '\u{2026}'),
    EntityRecord::new("prime", '\u{2032}'),
    EntityRecord::new("Prime", '\u{2033}'),
    EntityRecord::new("oline", '\u{203E}'),
    EntityRecord::new("frasl", '\u{2044}'),
    EntityRecord::new("weierp", '\u{2118}'),
    EntityRecord::new("image", '\u{2111}'),
    EntityRecord::new("real", '\u{211C}'),
    EntityRecord::new("trade", '\u{2122}'),
    EntityRecord::new("alefsym", '\u{2135}'),
    EntityRecord::new("larr", '\u{2190}'),
    EntityRecord::new("uarr", '\u{2191}'),
    EntityRecord::new("rarr", '\u{2192}'),
    EntityRecord::new("darr", '\u{2193}'),
    EntityRecord::new("harr", '\u{2194}'),
    EntityRecord::new("crarr", '\u{21B5}'),
    EntityRecord::new("lArr", '\u{21D0}'),
    EntityRecord::new("uArr", '\u{21D1}'),
    EntityRecord::new("rArr", '\u{21D2}'),
    EntityRecord::new("dArr", '\u{21D3}'),
    EntityRecord::new("hArr", '\u{21D4}'),
    EntityRecord::new("forall", '\u{2200}'),
    EntityRecord::new("part", '\u{2202}'),
    EntityRecord::new("exist", '\u{2203}'),
    EntityRecord::new("empty", '\u{2205}'),
    EntityRecord::new("nabla", '\u{2207}'),
    EntityRecord::new("isin", '\u{2208}'),
    EntityRecord::new("notin", '\u{2209}'),
    EntityRecord::new("ni", '\u{220B}'),
    EntityRecord::new("prod", '\u{220F}'),
    EntityRecord::new("sum", '\u{2211}'),
    EntityRecord::new("minus", '\u{2212}'),
    EntityRecord::new("lowast", '\u{2217}'),
    EntityRecord::new("radic", '\u{221A}'),
    EntityRecord::new("prop", '\u{221D}'),
    EntityRecord::new("infin", '\u{221E}'),
    EntityRecord::new("ang", '\u{2220}'),
    EntityRecord::new("and", '\u{2227}'),
    EntityRecord::new("or", '\u{2228}'),
    EntityRecord::new("cap", '\u{2229}'),
    EntityRecord::new("cup", '\u{222A}'),
    EntityRecord::new("int", '\u{222B}'),
    EntityRecord::new("there4", '\u{2234}'),
    EntityRecord::new("sim", '\u{223C}'),
    EntityRecord::new("cong", '\u{2245}'),
    EntityRecord::new("asymp", '\u{2248}'),
    EntityRecord::new("ne", '\u{2260}'),
    EntityRecord::new("equiv", '\u{2261}'),
    EntityRecord::new("le", '\u{2264}'),
    EntityRecord::new("ge", '\u{2265}'),
    EntityRecord::new("sub", '\u{2282}'),
    EntityRecord::new("sup", '\u{2283}'),
    EntityRecord::new("nsub", '\u{2284}'),
    EntityRecord::new("sube", '\u{2286}'),
    EntityRecord::new("supe", '\u{2287}'),
    EntityRecord::new("oplus", '\u{2295}'),
    EntityRecord::new("otimes", '\u{2297}'),
    EntityRecord::new("perp", '\u{22A5}'),
    EntityRecord::new("sdot", '\u{22C5}'),
    EntityRecord::new("lceil", '\u{2308}'),
    EntityRecord::new("rceil", '\u{2309}'),
    EntityRecord::new("lfloor", '\u{230A}'),
    EntityRecord::new("rfloor", '\u{230B}'),
    EntityRecord::new("lang", '\u{2329}'),
    EntityRecord::new("rang", '\u{232A}'),
    EntityRecord::new("spades", '\u{2660}'),
    EntityRecord::new("clubs", '\u{2663}'),
    EntityRecord::new("hearts", '\u{2665}'),
    EntityRecord::new("diams", '\u{2666}'),
    EntityRecord::new("loz", '\u{25CA}'),
    EntityRecord::new("OElig", '\u{0152}'),
    EntityRecord::new("oelig", '\u{0153}'),
    EntityRecord::new("Scaron", '\u{0160}'),
    EntityRecord::new("scaron", '\u{0161}'),
    EntityRecord::new("Yuml", '\u{0178}'),
    EntityRecord::new("circ", '\u{02C6}'),
    EntityRecord::new("tilde", '\u{02DC}'),
    EntityRecord::new("ensp", '\u{2002}'),
    EntityRecord::new("emsp", '\u{2003}'),
    EntityRecord::new("thinsp", '\u{2009}'),
    EntityRecord::new("zwnj", '\u{200C}'),
    EntityRecord::new("zwj", '\u{200D}'),
    EntityRecord::new("lrm", '\u{200E}'),
    EntityRecord::new("rlm", '\u{200F}'),
    EntityRecord::new("ndash", '\u{2013}'),
    EntityRecord::new("mdash", '\u{2014}'),
    EntityRecord::new("lsquo", '\u{2018}'),
    EntityRecord::new("rsquo", '\u{2019}'),
    EntityRecord::new("sbquo", '\u{201A}'),
    EntityRecord::new("ldquo", '\u{201C}'),
    EntityRecord::new("rdquo", '\u{201D}'),
    EntityRecord::new("bdquo", '\u{201E}'),
    EntityRecord::new("dagger", '\u{2020}'),
    EntityRecord::new("Dagger", '\u{2021}'),
    EntityRecord::new("permil", '\u{2030}'),
    EntityRecord::new("lsaquo", '\u{2039}'),
    EntityRecord::new("rsaquo", '\u{203A}'),
    EntityRecord::new("euro", '\u{20AC}'),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static EntityRecord>> =
    LazyLock::new(|| ENTITIES.iter().map(|e| (e.name, e)).collect());

static BY_CHAR: LazyLock<HashMap<char, &'static EntityRecord>> =
    LazyLock::new(|| ENTITIES.iter().map(|e| (e.codepoint, e)).collect());

/// Look up a reference by name, case-sensitively (`Alpha` and `alpha` differ)
#[must_use]
pub fn entity_by_name(name: &str) -> Option<&'static EntityRecord> {
    BY_NAME.get(name).copied()
}

#[must_use]
pub fn entity_by_char(c: char) -> Option<&'static EntityRecord> {
    BY_CHAR.get(&c).copied()
}
