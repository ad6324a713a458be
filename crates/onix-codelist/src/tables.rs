//! Static codelist tables.
//!
//! Descriptions follow the EDItEUR wording, including typographic
//! apostrophes (`’`), because downstream consumers match on them.

use crate::resolver::CodeEntry;

const fn e(code: &'static str, description: &'static str) -> CodeEntry {
    CodeEntry::new(code, description)
}

const fn s(code: &'static str, description: &'static str, symbol: &'static str) -> CodeEntry {
    CodeEntry::with_symbol(code, description, symbol)
}

// ── List 1: Notification or update type ──────────────────────────────

pub(crate) static NOTIFICATION_TYPE: &[CodeEntry] = &[
    e("01", "Early notification"),
    e("02", "Advance notification (confirmed)"),
    e("03", "Notification confirmed on publication"),
    e("04", "Update (partial)"),
    e("05", "Delete"),
    e("08", "Notice of sale"),
    e("09", "Notice of acquisition"),
    e("88", "Test update (Partial)"),
    e("89", "Test record"),
];

// ── List 3: Record source type ───────────────────────────────────────

pub(crate) static RECORD_SOURCE_TYPE: &[CodeEntry] = &[
    e("00", "Unspecified"),
    e("01", "Publisher"),
    e("02", "Publisher\u{2019}s distributor"),
    e("03", "Wholesaler"),
    e("04", "Bibliographic agency"),
    e("05", "Library bookseller"),
    e("06", "Publisher\u{2019}s sales agent"),
    e("07", "Publisher\u{2019}s conversion service provider"),
    e("08", "Conversion service provider"),
    e("09", "ISBN Registration Agency"),
    e("10", "ISTC Registration Agency"),
    e("11", "Retail bookseller"),
    e("12", "Education bookseller"),
    e("13", "Library aggregator"),
];

// ── List 5: Product identifier type ──────────────────────────────────

pub(crate) static PRODUCT_IDENTIFIER_TYPE: &[CodeEntry] = &[
    e("01", "Proprietary"),
    e("02", "ISBN-10"),
    e("03", "GTIN-13"),
    e("04", "UPC"),
    e("05", "ISMN-10"),
    e("06", "DOI"),
    e("13", "LCCN"),
    e("14", "GTIN-14"),
    e("15", "ISBN-13"),
    e("17", "Legal deposit number"),
    e("22", "URN"),
    e("23", "OCLC number"),
    e("24", "Co-publisher\u{2019}s ISBN-13"),
    e("25", "ISMN-13"),
    e("26", "ISBN-A"),
    e("27", "JP e-code"),
    e("28", "OLCC number"),
    e("29", "JP Magazine ID"),
    e("30", "UPC12+5"),
    e("31", "BNF Control number"),
    e("35", "ARK"),
];

// ── List 13: Series identifier type ──────────────────────────────────

pub(crate) static SERIES_IDENTIFIER_TYPE: &[CodeEntry] = &[
    e("01", "Proprietary"),
    e("02", "ISSN"),
    e("03", "German National Bibliography series ID"),
    e("04", "German Books in Print series ID"),
    e("05", "Electre series ID"),
    e("06", "DOI"),
    e("15", "ISBN-13"),
    e("22", "URN"),
    e("29", "BNF Control number"),
    e("35", "ARK"),
    e("38", "ISSN-L"),
];

// ── List 14: Text case flag ──────────────────────────────────────────

pub(crate) static TEXT_CASE: &[CodeEntry] = &[
    e("00", "Undefined"),
    e("01", "Sentence case"),
    e("02", "Title case"),
    e("03", "All capitals"),
];

// ── List 15: Title type ──────────────────────────────────────────────

pub(crate) static TITLE_TYPE: &[CodeEntry] = &[
    e("00", "Undefined"),
    e(
        "01",
        "Distinctive title (book); Cover title (serial); Title on item (serial content item or reviewed resource)",
    ),
    e("02", "ISSN key title of serial"),
    e("03", "Title in original language"),
    e("04", "Title acronym or initialism"),
    e("05", "Abbreviated title"),
    e("06", "Title in other language"),
    e("07", "Thematic title of journal issue"),
    e("08", "Former title"),
    e("10", "Distributor\u{2019}s title"),
    e("11", "Alternative title on cover"),
    e("12", "Alternative title on back"),
    e("13", "Expanded title"),
    e("14", "Alternative title"),
];

// ── List 16: Work identifier type ────────────────────────────────────

pub(crate) static WORK_IDENTIFIER_TYPE: &[CodeEntry] = &[
    e("01", "Proprietary"),
    e("06", "DOI"),
    e("11", "ISTC"),
    e("15", "ISBN-13"),
    e("18", "ISRC"),
    e("32", "GLIMIR"),
    e("33", "OWI"),
    e("39", "ISCC"),
];

// ── List 17: Contributor role ────────────────────────────────────────

pub(crate) static CONTRIBUTOR_ROLE: &[CodeEntry] = &[
    e("A01", "By (author)"),
    e("A02", "With"),
    e("A03", "Screenplay by"),
    e("A04", "Libretto by"),
    e("A05", "Lyrics by"),
    e("A06", "By (composer)"),
    e("A07", "By (artist)"),
    e("A08", "By (photographer)"),
    e("A09", "Created by"),
    e("A10", "From an idea by"),
    e("A11", "Designed by"),
    e("A12", "Illustrated by"),
    e("A13", "Photographs by"),
    e("A14", "Text by"),
    e("A15", "Preface by"),
    e("A16", "Prologue by"),
    e("A17", "Summary by"),
    e("A18", "Supplement by"),
    e("A19", "Afterword by"),
    e("A20", "Notes by"),
    e("A21", "Commentaries by"),
    e("A22", "Epilogue by"),
    e("A23", "Foreword by"),
    e("A24", "Introduction by"),
    e("A25", "Footnotes by"),
    e("A26", "Memoir by"),
    e("A27", "Experiments by"),
    e("A29", "Introduction and notes by"),
    e("A30", "Software written by"),
    e("A31", "Book and lyrics by"),
    e("A32", "Contributions by"),
    e("A33", "Appendix by"),
    e("A34", "Index by"),
    e("A35", "Drawings by"),
    e("A36", "Cover design or artwork by"),
    e("A37", "Preliminary work by"),
    e("A38", "Original author"),
    e("A39", "Maps by"),
    e("A40", "Inked or colored by"),
    e("A41", "Paper engineering by"),
    e("A42", "Continued by"),
    e("A43", "Interviewer"),
    e("A44", "Interviewee"),
    e("A45", "Comic script by"),
    e("A46", "Inker"),
    e("A47", "Colorist"),
    e("A48", "Letterer"),
    e("A51", "Research by"),
    e("A99", "Other primary creator"),
    e("B01", "Edited by"),
    e("B02", "Revised by"),
    e("B03", "Retold by"),
    e("B04", "Abridged by"),
    e("B05", "Adapted by"),
    e("B06", "Translated by"),
    e("B07", "As told by"),
    e("B08", "Translated with commentary by"),
    e("B09", "Series edited by"),
    e("B10", "Edited and translated by"),
    e("B11", "Editor-in-chief"),
    e("B12", "Guest editor"),
    e("B13", "Volume editor"),
    e("B14", "Editorial board member"),
    e("B15", "Editorial coordination by"),
    e("B16", "Managing editor"),
    e("B17", "Founded by"),
    e("B18", "Prepared for publication by"),
    e("B19", "Associate editor"),
    e("B20", "Consultant editor"),
    e("B21", "General editor"),
    e("B22", "Dramatized by"),
    e("B23", "General rapporteur"),
    e("B24", "Literary editor"),
    e("B25", "Arranged by (music)"),
    e("B26", "Technical editor"),
    e("B27", "Thesis advisor or supervisor"),
    e("B28", "Thesis examiner"),
    e("B29", "Scientific editor"),
    e("B30", "Historical advisor"),
    e("B31", "Original editor"),
    e("B99", "Other adaptation by"),
    e("C01", "Compiled by"),
    e("C02", "Selected by"),
    e("C03", "Non-text material selected by"),
    e("C04", "Curated by"),
    e("C99", "Other compilation by"),
    e("D01", "Producer"),
    e("D02", "Director"),
    e("D03", "Conductor"),
    e("D04", "Choreographer"),
    e("D99", "Other direction by"),
    e("E01", "Actor"),
    e("E02", "Dancer"),
    e("E03", "Narrator"),
    e("E04", "Commentator"),
    e("E05", "Vocal soloist"),
    e("E06", "Instrumental soloist"),
    e("E07", "Read by"),
    e("E08", "Performed by (orchestra, band, ensemble)"),
    e("E09", "Speaker"),
    e("E10", "Presenter"),
    e("E99", "Performed by"),
    e("F01", "Filmed/photographed by"),
    e("F02", "Editor (film or video)"),
    e("F99", "Other recording by"),
    e("Z01", "Assisted by"),
    e("Z02", "Honored/dedicated to"),
    e("Z03", "Enacting jurisdiction"),
    e("Z04", "Peer reviewed"),
    e("Z05", "Posthumously completed by"),
    e("Z98", "(Various roles)"),
    e("Z99", "Other"),
];

// ── List 18: Person / organization name type ─────────────────────────

pub(crate) static NAME_TYPE: &[CodeEntry] = &[
    e("00", "Unspecified"),
    e("01", "Pseudonym"),
    e("02", "Authority-controlled name"),
    e("03", "Earlier name"),
    e("04", "\u{2018}Real\u{2019} name"),
    e("05", "Transliterated / alternative language form of name"),
    e("06", "Later name"),
    e("07", "Fictional character name"),
];

// ── List 19: Unnamed person(s) ───────────────────────────────────────

pub(crate) static UNNAMED_PERSONS: &[CodeEntry] = &[
    e("01", "Unknown"),
    e("02", "Anonymous"),
    e("03", "et al"),
    e("04", "Various"),
    e("05", "Synthesised voice \u{2013} male"),
    e("06", "Synthesised voice \u{2013} female"),
    e("07", "Synthesised voice \u{2013} unspecified"),
    e("08", "Synthesised voice \u{2013} based on real voice actor"),
    e("09", "AI (Artificial intelligence)"),
];

// ── List 21: Edition type ────────────────────────────────────────────

pub(crate) static EDITION_TYPE: &[CodeEntry] = &[
    e("ABR", "Abridged edition"),
    e("ACT", "Acting edition"),
    e("ADP", "Adapted edition"),
    e("ALT", "Alternate"),
    e("ANN", "Annotated edition"),
    e("BLL", "Bilingual edition"),
    e("BLI", "Bilingual \u{2018}facing page\u{2019} edition"),
    e("BRL", "Braille edition"),
    e("BUD", "Budget edition"),
    e("CRI", "Critical edition"),
    e("CSP", "Coursepack"),
    e("DGO", "Digital original"),
    e("ENH", "Enhanced edition"),
    e("ENL", "Enlarged edition"),
    e("ETR", "Easy-to-read edition"),
    e("EXP", "Expurgated edition"),
    e("FAC", "Facsimile edition"),
    e("FST", "Festschrift"),
    e("HRE", "High readability edition"),
    e("ILL", "Illustrated edition"),
    e("INT", "International edition"),
    e("LTE", "Large type / large print edition"),
    e("MCP", "Microprint edition"),
    e("MDT", "Media tie-in"),
    e("MLL", "Multilingual edition"),
    e("NED", "New edition"),
    e("NUM", "Edition with numbered copies"),
    e("PRB", "Prebound edition"),
    e("REV", "Revised edition"),
    e("SCH", "School edition"),
    e("SIG", "Signed edition"),
    e("SMP", "Simplified language edition"),
    e("SPE", "Special edition"),
    e("STU", "Student edition"),
    e("TCH", "Teacher\u{2019}s edition"),
    e("UBR", "Unabridged edition"),
    e("ULP", "Ultra large print edition"),
    e("UNX", "Unexpurgated edition"),
    e("VAR", "Variorum edition"),
];

// ── List 22: Language role ───────────────────────────────────────────

pub(crate) static LANGUAGE_ROLE: &[CodeEntry] = &[
    e("01", "Language of text"),
    e("02", "Original language of a translated text"),
    e("03", "Language of abstracts"),
    e("04", "Rights language"),
    e("05", "Rights-excluded language"),
    e("06", "Original language in a multilingual edition"),
    e("07", "Translated language in a multilingual edition"),
    e("08", "Language of audio track"),
    e("09", "Language of subtitles"),
];

// ── List 23: Extent type ─────────────────────────────────────────────

pub(crate) static EXTENT_TYPE: &[CodeEntry] = &[
    e("00", "Main content page count"),
    e("02", "Total text length"),
    e("03", "Front matter page count"),
    e("04", "Back matter page count"),
    e("05", "Total numbered pages"),
    e("06", "Production page count"),
    e("07", "Absolute page count"),
    e("08", "Number of pages in print counterpart"),
    e("09", "Duration"),
    e("10", "Notional number of pages in digital product"),
    e("11", "Content page count"),
    e("12", "Total unnumbered insert page count"),
    e("13", "Duration of introductory matter"),
    e("14", "Duration of main content"),
    e("15", "Duration of back matter"),
    e("16", "Production duration"),
    e("17", "Number of cards"),
    e("18", "Number of write-in pages"),
    e("22", "Filesize"),
    e("23", "Storage filesize"),
];

// ── List 24: Extent unit ─────────────────────────────────────────────

pub(crate) static EXTENT_UNIT: &[CodeEntry] = &[
    e("00", "Physical pieces"),
    e("01", "Characters"),
    e("02", "Words"),
    e("03", "Pages"),
    e("04", "Hours (integer and decimals)"),
    e("05", "Minutes (integer and decimals)"),
    e("06", "Seconds (integer only)"),
    e("11", "Tracks"),
    e("12", "Discs"),
    e("14", "Hours HHH"),
    e("15", "Hours and minutes HHHMM"),
    e("16", "Hours minutes seconds HHHMMSS"),
    e("17", "Bytes"),
    e("18", "Kbytes"),
    e("19", "Mbytes"),
    e("31", "Chapters"),
];

// ── List 26: Main subject scheme identifier ──────────────────────────

pub(crate) static SUBJECT_SCHEME_IDENTIFIER: &[CodeEntry] = &[
    e("01", "Dewey"),
    e("02", "Abridged Dewey"),
    e("03", "LC classification"),
    e("04", "LC subject heading"),
    e("05", "NLM classification"),
    e("06", "MeSH heading"),
    e("07", "NAL subject heading"),
    e("08", "AAT"),
    e("09", "UDC"),
    e("10", "BISAC Subject Heading"),
    e("11", "BISAC Regional theme"),
    e("12", "BIC subject category"),
    e("13", "BIC geographical qualifier"),
    e("14", "BIC language qualifier (language as subject)"),
    e("15", "BIC time period qualifier"),
    e("16", "BIC educational purpose qualifier"),
    e("17", "BIC reading level and special interest qualifier"),
    e("18", "DDC-Sachgruppen der Deutschen Nationalbibliografie"),
    e("19", "LC fiction genre heading"),
    e("20", "Keywords"),
    e("21", "BIC children\u{2019}s book marketing category"),
    e("22", "BISAC Merchandising Theme"),
    e("23", "Publisher\u{2019}s own category code"),
    e("24", "Proprietary subject scheme"),
    e("25", "Tabla de materias ISBN"),
    e("26", "Warengruppen-Systematik des deutschen Buchhandels"),
    e("27", "SWD"),
    e("28", "Th\u{e8}mes Electre"),
    e("29", "CLIL"),
    e("30", "DNB-Sachgruppen"),
    e("31", "NUGI"),
    e("32", "NUR"),
    e("33", "ECPA Christian Book Category"),
    e("34", "SISO"),
    e("35", "Korean Decimal Classification (KDC)"),
    e("36", "DDC Deutsch 22"),
    e("37", "Bokgrupper"),
    e("38", "Varegrupper"),
    e("39", "L\u{e6}seniv\u{e5}koder"),
    e("40", "Nasjonalbibliotekets Dewey"),
    e("64", "YSA"),
    e("71", "JEL classification"),
    e("72", "CBMC"),
    e("73", "Pinyin (Chinese) keywords"),
    e("93", "Thema subject category"),
    e("94", "Thema place qualifier"),
    e("95", "Thema language qualifier"),
    e("96", "Thema time period qualifier"),
    e("97", "Thema educational purpose qualifier"),
    e("98", "Thema interest age / special interest qualifier"),
    e("99", "Thema style qualifier"),
    e("A2", "Fast"),
    e("A7", "Irish Library Council Subject Headings"),
    e("B2", "Keywords (not for display)"),
];

// ── List 34: Text format ─────────────────────────────────────────────

pub(crate) static TEXT_FORMAT: &[CodeEntry] = &[
    e("02", "HTML"),
    e("03", "XML"),
    e("05", "XHTML"),
    e("06", "Default text format"),
    e("07", "Basic ASCII text"),
    e("08", "PDF"),
    e("09", "Microsoft rich text format (RTF)"),
    e("10", "Microsoft Word binary format (DOC)"),
    e("11", "ECMA 376 WordprocessingML"),
    e("12", "ISO 26300 ODF"),
    e("13", "Corel Wordperfect binary format (DOC)"),
    e("14", "EPUB"),
    e("15", "XPS"),
];

// ── List 44: Name identifier type ────────────────────────────────────

pub(crate) static NAME_IDENTIFIER_TYPE: &[CodeEntry] = &[
    e("01", "Proprietary"),
    s("02", "Proprietary", "Proprietary_"),
    e("03", "DNB publisher identifier"),
    e("04", "B\u{f6}rsenverein Verkehrsnummer"),
    e("05", "German ISBN Agency publisher identifier"),
    e("06", "GLN"),
    e("07", "SAN"),
    e("08", "MARC organization code"),
    e("10", "Centraal Boekhuis Relatie ID"),
    e("13", "Fondscode Boekenbank"),
    e("15", "Y-tunnus"),
    e("16", "ISNI"),
    e("17", "PND"),
    e("18", "LCCN"),
    e("19", "Japanese Publisher identifier"),
    e("20", "GKD"),
    e("21", "ORCID"),
    e("22", "GAPP Publisher Identifier"),
    e("23", "VAT Identity Number"),
    e("24", "JP Distribution Identifier"),
    e("25", "GND"),
    e("26", "DUNS"),
    e("27", "Ringgold ID"),
    e("28", "Identifiant Editeur Electre"),
    e("29", "EIDR Party DOI"),
    e("30", "Identifiant Marque Electre"),
    e("31", "VIAF ID"),
    e("32", "FundRef DOI"),
    e("33", "BNE CN"),
    e("34", "BNF Control Number"),
    e("35", "ARK"),
    e("36", "Nasjonalt autoritetsregister"),
    e("37", "GRID"),
    e("38", "IDRef"),
    e("39", "IPI"),
    e("40", "ROR"),
];

// ── List 45: Publishing role ─────────────────────────────────────────

pub(crate) static PUBLISHING_ROLE: &[CodeEntry] = &[
    e("01", "Publisher"),
    e("02", "Co-publisher"),
    e("03", "Sponsor"),
    e("04", "Publisher of original-language version"),
    e("05", "Host/distributor of electronic content"),
    e("06", "Published for/on behalf of"),
    e("07", "Published in association with"),
    e("09", "New or acquiring publisher"),
    e("10", "Publishing group"),
    e("11", "Publisher of facsimile original"),
    e("12", "Repackager of prebound edition"),
    e("13", "Former publisher"),
    e("14", "Publication funder"),
    e("15", "Research funder"),
    e("16", "Funding body"),
    e("17", "Printer"),
    e("18", "Commissioning body"),
    e("19", "Copyright holder of typographic design"),
];

// ── List 49: Region (subset) ─────────────────────────────────────────

pub(crate) static REGION: &[CodeEntry] = &[
    e("AU-CT", "Australian Capital Territory"),
    e("AU-NS", "New South Wales"),
    e("AU-NT", "Northern Territory"),
    e("AU-QL", "Queensland"),
    e("AU-SA", "South Australia"),
    e("AU-TS", "Tasmania"),
    e("AU-VI", "Victoria"),
    e("AU-WA", "Western Australia"),
    e("CA-AB", "Alberta"),
    e("CA-BC", "British Columbia"),
    e("CA-MB", "Manitoba"),
    e("CA-NB", "New Brunswick"),
    e("CA-NL", "Newfoundland and Labrador"),
    e("CA-NS", "Nova Scotia"),
    e("CA-NT", "Northwest Territories"),
    e("CA-NU", "Nunavut"),
    e("CA-ON", "Ontario"),
    e("CA-PE", "Prince Edward Island"),
    e("CA-QC", "Quebec"),
    e("CA-SK", "Saskatchewan"),
    e("CA-YT", "Yukon Territory"),
    e("GB-AIR", "UK airside"),
    e("GB-APS", "UK airports"),
    e("GB-CHA", "Channel Islands"),
    e("GB-ENG", "England"),
    e("GB-EWS", "England, Wales, Scotland"),
    e("GB-IOM", "Isle of Man"),
    e("GB-NIR", "Northern Ireland"),
    e("GB-SCT", "Scotland"),
    e("GB-WLS", "Wales"),
    e("ECZ", "Eurozone"),
    e("WORLD", "World"),
];

// ── List 55: Date format ─────────────────────────────────────────────

pub(crate) static DATE_FORMAT: &[CodeEntry] = &[
    e("00", "YYYYMMDD"),
    e("01", "YYYYMM"),
    e("02", "YYYYWW"),
    e("03", "YYYYQ"),
    e("04", "YYYYS"),
    e("05", "YYYY"),
    e("06", "YYYYMMDDYYYYMMDD"),
    e("07", "YYYYMMYYYYMM"),
    e("08", "YYYYWWYYYYWW"),
    e("09", "YYYYQYYYYQ"),
    e("10", "YYYYSYYYYS"),
    e("11", "YYYYYYYY"),
    e("12", "Text string"),
    e("13", "YYYYMMDDThhmm"),
    e("14", "YYYYMMDDThhmmss"),
];

// ── List 73: Website role ────────────────────────────────────────────

pub(crate) static WEBSITE_ROLE: &[CodeEntry] = &[
    e("00", "Unspecified, see website description"),
    e("01", "Publisher\u{2019}s corporate website"),
    e("02", "Publisher\u{2019}s website for a specified work"),
    e("03", "Online hosting service home page"),
    e("04", "Journal home page"),
    e("05", "Online resource \u{2018}available content\u{2019} page"),
    e("06", "Contributor\u{2019}s own website"),
    e("07", "Publisher\u{2019}s website relating to specified contributor"),
    e("08", "Other publisher\u{2019}s website relating to specified contributor"),
    e("09", "Third-party website relating to specified contributor"),
    e("10", "Contributor\u{2019}s own website for specified work"),
    e("11", "Other publisher\u{2019}s website relating to specified work"),
    e("12", "Third-party website relating to specified work"),
    e("13", "Contributor\u{2019}s own website for group or series of works"),
    e("14", "Publisher\u{2019}s website relating to group or series of works"),
    e("15", "Other publisher\u{2019}s website relating to group or series of works"),
    e("16", "Third-party website relating to group or series of works (eg a fan site)"),
    e("17", "Publisher\u{2019}s B2B website"),
    e("18", "Publisher\u{2019}s B2C website"),
    e("23", "Author blog"),
    e("24", "Web page for author presentation / commentary"),
    e("25", "Web page for author interview"),
    e("26", "Web page for author reading"),
    e("27", "Web page for cover material"),
    e("28", "Web page for sample content"),
    e("29", "Web page for full content"),
    e("30", "Web page for other commentary / discussion"),
    e("31", "Transfer-URL"),
    e("32", "DOI Website Link"),
    e("33", "Supplier\u{2019}s corporate website"),
    e("34", "Supplier\u{2019}s B2B website"),
    e("35", "Supplier\u{2019}s B2C website"),
    e("36", "Supplier\u{2019}s website for a specified work"),
    e("37", "Supplier\u{2019}s B2B website for a specified work"),
    e("38", "Supplier\u{2019}s B2C website for a specified work"),
    e("39", "Supplier\u{2019}s website for a group or series of works"),
    e("40", "URL of full metadata description"),
    e("41", "Social networking URL"),
    e("42", "Author\u{2019}s podcast"),
    e("43", "Series podcast"),
    e("44", "Product podcast"),
    e("45", "Publisher\u{2019}s or third party podcast"),
];

// ── List 74: Language (subset of ISO 639-2/B) ────────────────────────

pub(crate) static LANGUAGE: &[CodeEntry] = &[
    e("afr", "Afrikaans"),
    e("alb", "Albanian"),
    e("ara", "Arabic"),
    e("arm", "Armenian"),
    e("baq", "Basque"),
    e("ben", "Bengali"),
    e("bos", "Bosnian"),
    e("bul", "Bulgarian"),
    e("cat", "Catalan"),
    e("chi", "Chinese"),
    e("cze", "Czech"),
    e("dan", "Danish"),
    e("dut", "Dutch; Flemish"),
    e("eng", "English"),
    e("est", "Estonian"),
    e("fao", "Faroese"),
    e("fij", "Fijian"),
    e("fil", "Filipino; Pilipino"),
    e("fin", "Finnish"),
    e("fre", "French"),
    e("geo", "Georgian"),
    e("ger", "German"),
    e("gla", "Scottish Gaelic"),
    e("gle", "Irish"),
    e("glg", "Galician"),
    e("gre", "Greek, Modern (1453-)"),
    e("grc", "Greek, Ancient (to 1453)"),
    e("guj", "Gujarati"),
    e("haw", "Hawaiian"),
    e("heb", "Hebrew"),
    e("hin", "Hindi"),
    e("hrv", "Croatian"),
    e("hun", "Hungarian"),
    e("ice", "Icelandic"),
    e("ind", "Indonesian"),
    e("ita", "Italian"),
    e("jpn", "Japanese"),
    e("kor", "Korean"),
    e("lat", "Latin"),
    e("lav", "Latvian"),
    e("lit", "Lithuanian"),
    e("mao", "Maori"),
    e("may", "Malay"),
    e("mul", "Multiple languages"),
    e("nob", "Norwegian Bokm\u{e5}l"),
    e("nno", "Norwegian Nynorsk"),
    e("nor", "Norwegian"),
    e("per", "Persian"),
    e("pol", "Polish"),
    e("por", "Portuguese"),
    e("pan", "Panjabi"),
    e("rum", "Romanian"),
    e("rus", "Russian"),
    e("smo", "Samoan"),
    e("san", "Sanskrit"),
    e("slo", "Slovak"),
    e("slv", "Slovenian"),
    e("spa", "Spanish"),
    e("srp", "Serbian"),
    e("swa", "Swahili"),
    e("swe", "Swedish"),
    e("tam", "Tamil"),
    e("tha", "Thai"),
    e("ton", "Tonga (Tonga Islands)"),
    e("tur", "Turkish"),
    e("ukr", "Ukrainian"),
    e("und", "Undetermined language"),
    e("urd", "Urdu"),
    e("vie", "Vietnamese"),
    e("wel", "Welsh"),
    e("yid", "Yiddish"),
    e("zul", "Zulu"),
    e("zxx", "No linguistic content"),
];

// ── List 91: Country (subset of ISO 3166-1) ──────────────────────────

pub(crate) static COUNTRY: &[CodeEntry] = &[
    e("AE", "United Arab Emirates"),
    e("AR", "Argentina"),
    e("AT", "Austria"),
    e("AU", "Australia"),
    e("BD", "Bangladesh"),
    e("BE", "Belgium"),
    e("BR", "Brazil"),
    e("CA", "Canada"),
    e("CH", "Switzerland"),
    e("CL", "Chile"),
    e("CN", "China"),
    e("CO", "Colombia"),
    e("CZ", "Czechia"),
    e("DE", "Germany"),
    e("DK", "Denmark"),
    e("EG", "Egypt"),
    e("ES", "Spain"),
    e("FI", "Finland"),
    e("FJ", "Fiji"),
    e("FR", "France"),
    e("GB", "United Kingdom"),
    e("GR", "Greece"),
    e("HK", "Hong Kong"),
    e("HU", "Hungary"),
    e("ID", "Indonesia"),
    e("IE", "Ireland"),
    e("IL", "Israel"),
    e("IN", "India"),
    e("IR", "Iran, Islamic Republic of"),
    e("IS", "Iceland"),
    e("IT", "Italy"),
    e("JP", "Japan"),
    e("KE", "Kenya"),
    e("KR", "Korea, Republic of"),
    e("MX", "Mexico"),
    e("MY", "Malaysia"),
    e("NG", "Nigeria"),
    e("NL", "Netherlands"),
    e("NO", "Norway"),
    e("NZ", "New Zealand"),
    e("PE", "Peru"),
    e("PG", "Papua New Guinea"),
    e("PH", "Philippines"),
    e("PK", "Pakistan"),
    e("PL", "Poland"),
    e("PT", "Portugal"),
    e("RO", "Romania"),
    e("RU", "Russian Federation"),
    e("SA", "Saudi Arabia"),
    e("SE", "Sweden"),
    e("SG", "Singapore"),
    e("TH", "Thailand"),
    e("TR", "T\u{fc}rkiye"),
    e("TW", "Taiwan, Province of China"),
    e("UA", "Ukraine"),
    e("US", "United States"),
    e("VN", "Viet Nam"),
    e("WS", "Samoa"),
    e("ZA", "South Africa"),
];

// ── List 121: Text script (subset of ISO 15924) ──────────────────────

pub(crate) static TEXT_SCRIPT: &[CodeEntry] = &[
    e("Arab", "Arabic"),
    e("Armn", "Armenian"),
    e("Beng", "Bengali"),
    e("Cyrl", "Cyrillic"),
    e("Deva", "Devanagari (Nagari)"),
    e("Geor", "Georgian (Mkhedruli and Mtavruli)"),
    e("Grek", "Greek"),
    e("Gujr", "Gujarati"),
    e("Hang", "Hangul (Hang\u{16d}l, Hangeul)"),
    e("Hans", "Han (Simplified variant)"),
    e("Hant", "Han (Traditional variant)"),
    e("Hebr", "Hebrew"),
    e("Hira", "Hiragana"),
    e("Jpan", "Japanese (alias for Han + Hiragana + Katakana)"),
    e("Kana", "Katakana"),
    e("Kore", "Korean (alias for Hangul + Han)"),
    e("Latn", "Latin"),
    e("Taml", "Tamil"),
    e("Thai", "Thai"),
    e("Zyyy", "Code for undetermined script"),
];

// ── List 148: Collection type ────────────────────────────────────────

pub(crate) static COLLECTION_TYPE: &[CodeEntry] = &[
    e("00", "Unspecified (default)"),
    e("10", "Publisher collection"),
    e("11", "Collection \u{e9}ditoriale"),
    e("20", "Ascribed collection"),
];

// ── List 149: Title element level ────────────────────────────────────

pub(crate) static TITLE_ELEMENT_LEVEL: &[CodeEntry] = &[
    e("01", "Product"),
    e("02", "Collection level"),
    e("03", "Subcollection"),
    e("04", "Content item"),
    e("05", "Master brand"),
    e("06", "Sub-subcollection"),
];

// ── List 151: Contributor place relator ──────────────────────────────

pub(crate) static CONTRIBUTOR_PLACE_RELATOR: &[CodeEntry] = &[
    e("00", "Associated with"),
    e("01", "Born in"),
    e("02", "Died in"),
    e("03", "Formerly resided in"),
    e("04", "Currently resides in"),
    e("05", "Educated in"),
    e("06", "Worked in"),
    e("07", "Flourished in"),
    e("08", "Citizen of"),
    e("09", "Registered in"),
    e("10", "Operating from"),
];

// ── List 153: Text type ──────────────────────────────────────────────

pub(crate) static TEXT_TYPE: &[CodeEntry] = &[
    e("01", "Sender-defined text"),
    e("02", "Short description/annotation"),
    e("03", "Description"),
    e("04", "Table of contents"),
    e("05", "Primary cover copy"),
    e("06", "Review quote"),
    e("07", "Review quote: previous edition"),
    e("08", "Review quote: previous work"),
    e("09", "Endorsement"),
    e("10", "Promotional headline"),
    e("11", "Feature"),
    e("12", "Biographical note"),
    e("13", "Publisher\u{2019}s notice"),
    e("14", "Excerpt"),
    e("15", "Index"),
    e("16", "Short description/annotation for collection"),
    e("17", "Description for collection"),
    e("18", "New feature"),
    e("19", "Version history"),
    e("20", "Open access statement"),
    e("21", "Digital exclusivity statement"),
    e("22", "Official recommendation"),
    e("23", "JBPA description"),
    e("24", "schema.org snippet"),
    e("25", "Errata"),
    e("26", "Introduction"),
    e("27", "Secondary audience description"),
];

// ── List 163: Publishing date role ───────────────────────────────────

pub(crate) static PUBLISHING_DATE_ROLE: &[CodeEntry] = &[
    e("01", "Publication date"),
    e("02", "Sales embargo date"),
    e("09", "Public announcement date"),
    e("10", "Trade announcement date"),
    e("11", "Date of first publication"),
    e("12", "Last reprint date"),
    e("13", "Out-of-print / permanently withdrawn date"),
    e("16", "Last reissue date"),
    e("19", "Publication date of print counterpart"),
    e("20", "Date of first publication in original language"),
    e("21", "Forthcoming reissue date"),
    e("22", "Expected availability date after temporary withdrawal"),
    e("23", "Review embargo date"),
    e("25", "Publisher\u{2019}s reservation order deadline"),
    e("26", "Forthcoming reprint date"),
    e("27", "Preorder embargo date"),
    e("28", "Transfer date"),
    e("29", "Date of production"),
    e("30", "Streaming embargo date"),
    e("31", "Subscription embargo date"),
    e("35", "CIP date"),
];

// ── List 164: Work relation ──────────────────────────────────────────

pub(crate) static WORK_RELATION: &[CodeEntry] = &[
    e("01", "Manifestation of"),
    e("02", "Derived from"),
    e("03", "Related work is derived from this"),
    e("04", "Other work in same collection"),
    e("05", "Other work by same contributor"),
    e("06", "Manifestation of original work"),
    e("21", "Derived from by abridgement"),
    e("22", "Derived from by annotation"),
    e("23", "Derived from by compilation"),
    e("24", "Derived from by criticism"),
    e("25", "Derived from by excerption"),
    e("26", "Derived from by expurgation"),
    e("27", "Derived from by addition (of non-text material)"),
    e("28", "Derived from by revision"),
    e("29", "Derived from via translation"),
    e("30", "Derived from via novelization"),
    e("31", "Derived from by reissue"),
    e("32", "Derived from by adaptation"),
    e("41", "Is the source of an abridgement"),
    e("42", "Is the source of an annotation"),
    e("43", "Is the source of a compilation"),
    e("44", "Is the source of criticism"),
    e("45", "Is the source of an excerption"),
    e("46", "Is the source of an expurgation"),
    e("47", "Is the source of added material"),
    e("48", "Is the source of a revision"),
    e("49", "Is the source of a translation"),
    e("50", "Is the source of a novelization"),
    e("51", "Is the source of a reissue"),
    e("52", "Is the source of an adaptation"),
];

// ── List 177: Person / organization date role ────────────────────────

pub(crate) static PERSON_DATE_ROLE: &[CodeEntry] = &[
    e("007", "Date of birth"),
    e("008", "Date of death"),
    e("009", "Flourished around"),
    e("050", "Date of founding"),
    e("051", "Date of dissolution"),
    e("056", "Last updated"),
];

// ── List 229: Gender ─────────────────────────────────────────────────

pub(crate) static GENDER: &[CodeEntry] = &[
    e("f", "Female"),
    e("m", "Male"),
    e("u", "Unknown or unspecified"),
];
