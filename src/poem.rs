use std::{fmt, str::FromStr};

use anyhow::{bail, Error, Result};

pub const POETIC_EDDA: &str = "Sæmundar-Edda";

// 注釈用のディレクトリが用意されている詩
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Poem {
    Rigsthula,
    HelreidBrynhildar,
    Grottasongr,
    Sigrdrifumal,
    Harbardsljod,
    Grimnismal,
    Thrymskvida,
    Voluspa,
    AtlamalInGraenlenzku,
    Hyndluljod,
    Skirnismal,
    Hymiskvida,
    Atlakvida,
    Vafthrudnismal,
    Oddrunarkvida,
    Volundarkvida,
    Alvissmal,
    Fafnismal,
    DrapNiflunga,
    Havamal,
    Gudrunarhvot,
    Hamdismal,
    BaldrsDraumar,
    Lokasenna,
    Gudrunarkvida,
    Reginsmal,
}

impl Poem {
    pub const ALL: [Poem; 26] = [
        Poem::Rigsthula,
        Poem::HelreidBrynhildar,
        Poem::Grottasongr,
        Poem::Sigrdrifumal,
        Poem::Harbardsljod,
        Poem::Grimnismal,
        Poem::Thrymskvida,
        Poem::Voluspa,
        Poem::AtlamalInGraenlenzku,
        Poem::Hyndluljod,
        Poem::Skirnismal,
        Poem::Hymiskvida,
        Poem::Atlakvida,
        Poem::Vafthrudnismal,
        Poem::Oddrunarkvida,
        Poem::Volundarkvida,
        Poem::Alvissmal,
        Poem::Fafnismal,
        Poem::DrapNiflunga,
        Poem::Havamal,
        Poem::Gudrunarhvot,
        Poem::Hamdismal,
        Poem::BaldrsDraumar,
        Poem::Lokasenna,
        Poem::Gudrunarkvida,
        Poem::Reginsmal,
    ];

    // Directory name of the poem inside the corpus.
    pub fn title(&self) -> &'static str {
        match self {
            Poem::Rigsthula => "Rígsþula",
            Poem::HelreidBrynhildar => "Helreið Brynhildar",
            Poem::Grottasongr => "Gróttasöngr",
            Poem::Sigrdrifumal => "Sigrdrífumál",
            Poem::Harbardsljod => "Hárbarðsljóð",
            Poem::Grimnismal => "Grímnismál",
            Poem::Thrymskvida => "Þrymskviða",
            Poem::Voluspa => "Völuspá",
            Poem::AtlamalInGraenlenzku => "Atlamál in grænlenzku",
            Poem::Hyndluljod => "Hyndluljóð",
            Poem::Skirnismal => "Skírnismál",
            Poem::Hymiskvida => "Hymiskviða",
            Poem::Atlakvida => "Atlakviða",
            Poem::Vafthrudnismal => "Vafþrúðnismál",
            Poem::Oddrunarkvida => "Oddrúnarkviða",
            Poem::Volundarkvida => "Völundarkviða",
            Poem::Alvissmal => "Alvíssmál",
            Poem::Fafnismal => "Fáfnismál",
            Poem::DrapNiflunga => "Dráp Niflunga",
            Poem::Havamal => "Hávamál",
            Poem::Gudrunarhvot => "Guðrúnarhvöt",
            Poem::Hamdismal => "Hamðismál",
            Poem::BaldrsDraumar => "Baldrs draumar",
            Poem::Lokasenna => "Lokasenna",
            Poem::Gudrunarkvida => "Guðrúnarkviða",
            Poem::Reginsmal => "Reginsmál",
        }
    }

    // `Sæmundar-Edda/<title>/txt_files`
    pub fn txt_files_dir(&self) -> String {
        format!("{}/{}/txt_files", POETIC_EDDA, self.title())
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Poem {
    type Err = Error;

    fn from_str(title: &str) -> Result<Self> {
        let title = title.trim();
        match Poem::ALL.iter().find(|p| p.title() == title) {
            Some(&poem) => Ok(poem),
            None => bail!("Unknown poem title: {:?}", title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_title_parses_back() -> Result<()> {
        for poem in Poem::ALL {
            assert_eq!(poem.title().parse::<Poem>()?, poem);
        }
        Ok(())
    }

    #[test]
    fn rejects_unknown_title() {
        assert!("Snorra-Edda".parse::<Poem>().is_err());
    }

    #[test]
    fn txt_files_dir_uses_title() {
        assert_eq!(
            Poem::Voluspa.txt_files_dir(),
            "Sæmundar-Edda/Völuspá/txt_files"
        );
    }
}
