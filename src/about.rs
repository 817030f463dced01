//! Fixed texts of the directory: header, hero, footer and the about page

use crate::catalog::ManufacturingStatus;

pub const HEADER_TITLE: &str = "Svensk Databas av Maximilian";
pub const HERO_TITLE: &str = "Svensk databas";
pub const FOOTER_TITLE: &str = "Svensk databas";
pub const FOOTER_TAGLINE: &str = "Transparens kring svenska varumärken och deras tillverkning";

/// Hero line including the number of brands in the register
#[must_use]
pub fn hero_text(brand_count: usize) -> String {
    format!(
        "Den svenska databasen med {brand_count} märken och tillverkare. Svart på vitt med fokus på enkelhet."
    )
}

/// A block of about-page content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    /// Paragraph whose lead-in is emphasized
    Emphasis(&'static str, &'static str),
    Bullets(&'static [&'static str]),
    /// Definition of one manufacturing status
    Status(ManufacturingStatus, &'static str),
    /// Paragraph ending in the contact address
    Contact(&'static str),
}

/// A headed section of the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

/// About page content in reading order
pub const SECTIONS: &[Section] = &[
    Section {
        heading: "Svensktillverkat?",
        blocks: &[Block::Paragraph(
            "Det är inte alltid så enkelt som det låter. Den här databasen skapar transparens kring svenska varumärken och var deras produkter faktiskt tillverkas.",
        )],
    },
    Section {
        heading: "Om projektet",
        blocks: &[
            Block::Paragraph(
                "Den här databasen samlar information om svenska varumärken och deras tillverkningsprocesser. Målet är inte att peka finger, utan att ge dig som konsument möjlighet att fatta informerade beslut baserade på fakta.",
            ),
            Block::Paragraph(
                "Vissa varumärken tillverkar allt i Sverige. Andra har flyttat produktionen utomlands men behållit sitt svenska arv i marknadsföringen. Många ligger någonstans däremellan, med vissa produktlinjer eller komponenter tillverkade i Sverige.",
            ),
        ],
    },
    Section {
        heading: "Så funkar det",
        blocks: &[
            Block::Paragraph("Varje varumärke kategoriseras enligt följande:"),
            Block::Status(
                ManufacturingStatus::Yes,
                "Produkterna tillverkas huvudsakligen i Sverige. Det kan innebära att hela produktionen sker här, eller att de mest kritiska komponenterna och monteringen görs i Sverige.",
            ),
            Block::Status(
                ManufacturingStatus::Partial,
                "Delar av produktionen sker i Sverige, men betydande delar görs även utomlands. Detta kan innebära att vissa produktlinjer tillverkas i Sverige medan andra inte gör det, eller att komponenter kommer från olika länder.",
            ),
            Block::Status(
                ManufacturingStatus::No,
                "Produktionen sker huvudsakligen utomlands. Varumärket kan vara svenskt i ursprung eller ägande, men tillverkningen är förlagd till andra länder.",
            ),
            Block::Paragraph(
                "Informationen samlas in från företagens egna uppgifter, årsredovisningar, pressmeddelanden och offentliga källor. Jag strävar efter att hålla databasen så aktuell och korrekt som möjligt.",
            ),
        ],
    },
    Section {
        heading: "Upptäcker du att något är fel?",
        blocks: &[
            Block::Contact(
                "Företag förändras, produktionen flyttas, och ägare byts ut. Om du upptäcker att information i databasen är föråldrad eller felaktig, hör gärna av dig till",
            ),
            Block::Paragraph("Jag tar gärna emot:"),
            Block::Bullets(&[
                "Rättelser av befintlig information",
                "Förslag på nya varumärken att lägga till",
                "Uppdateringar om förändringar i produktion eller ägande",
                "Källor som kan verifiera information",
            ]),
            Block::Paragraph("All feedback hjälper till att göra databasen mer användbar för alla."),
        ],
    },
    Section {
        heading: "Kommande funktioner",
        blocks: &[
            Block::Paragraph("Framtida funktioner inkluderar bland annat:"),
            Block::Bullets(&[
                "Tipsa om nya varumärken direkt i katalogen",
                "Rapportera felaktig information med ett klick",
                "M.fl..",
            ]),
            Block::Paragraph(
                "Har du förslag på funktioner som skulle göra databasen mer användbar? Hör av dig!",
            ),
        ],
    },
    Section {
        heading: "Transparens & begränsningar",
        blocks: &[
            Block::Emphasis(
                "Detta är ett oberoende projekt",
                "som drivs av intresse för konsumenttransparens och svensk industri. Ingen information är sponsrad eller betald.",
            ),
            Block::Emphasis("Begränsningar att ha i åtanke:", ""),
            Block::Bullets(&[
                "Tillverkningsinformation kan ändras över tid",
                "Komplexa koncernstrukturer gör det ibland svårt att ge ett enkelt svar",
                "\"Tillverkad i Sverige\" kan betyda olika saker för olika produkter",
                "Databasen uppdateras löpande men är inte alltid realtidsuppdaterad",
            ]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_includes_count() {
        assert_eq!(
            hero_text(24),
            "Den svenska databasen med 24 märken och tillverkare. Svart på vitt med fokus på enkelhet."
        );
    }

    #[test]
    fn test_about_defines_every_status_once() {
        let defined: Vec<ManufacturingStatus> = SECTIONS
            .iter()
            .flat_map(|s| s.blocks)
            .filter_map(|b| match b {
                Block::Status(status, _) => Some(*status),
                _ => None,
            })
            .collect();
        assert_eq!(defined, ManufacturingStatus::ALL.to_vec());
    }

    #[test]
    fn test_about_has_contact_block() {
        let contacts = SECTIONS
            .iter()
            .flat_map(|s| s.blocks)
            .filter(|b| matches!(b, Block::Contact(_)))
            .count();
        assert_eq!(contacts, 1);
    }
}
