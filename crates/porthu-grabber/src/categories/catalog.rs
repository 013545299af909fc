//! ETSI EN 300 468 content categories and the port.hu genre dictionary

/// ETSI EN 300 468 V1.14.1 content nibble categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtsiCategory {
    MovieDrama,
    DetectiveThriller,
    AdventureWesternWar,
    SciencefictionFantasyHorror,
    Comedy,
    SoapMelodramaFolkloric,
    Romance,
    SeriousClassicalReligiousHistoricalMovieDrama,
    AdultMovieDrama,

    NewsCurrentaffairs,
    NewsWeatherreport,
    NewsMagazine,
    Documentary,
    DiscussionInterviewDebate,

    ShowGameshow,
    GameshowQuizContest,
    Varietyshow,
    Talkshow,

    Sports,
    Specialevents,
    Sportsmagazines,
    FootballSoccer,
    TennisSquash,
    Teamsports,
    Athletics,
    Motorsport,
    Watersport,
    Wintersports,
    Equestrian,
    Martialsports,

    ChildrensYouthProgrammes,
    PreschoolChildrensProgrammes,
    EntertainmentProgrammesFor6to14,
    EntertainmentProgrammesFor10to16,
    InformationalEducationalSchoolProgrammes,
    CartoonsPuppets,

    MusicBalletDance,
    RockPop,
    SeriousmusicClassicalmusic,
    FolkTraditionalmusic,
    Jazz,
    MusicalOpera,
    Ballet,

    ArtsCulture,
    Performingarts,
    Finearts,
    Religion,
    PopularcultureTraditionalarts,
    Literature,
    FilmCinema,
    ExperimentalfilmVideo,
    BroadcastingPress,
    Newmedia,
    ArtsCultureMagazines,
    Fashion,

    SocialPoliticalissuesEconomics,
    MagazinesReportsDocumentary,
    EconomicsSocialAdvisory,
    RemarkablePeople,

    EducationScienceFactual,
    NatureAnimalsEnvironment,
    TechnologyNaturalsciences,
    MedicinePhysiologyPsychology,
    ForeigncountriesExpeditions,
    SocialSpiritualsciences,
    Furthereducation,
    Languages,

    LeisureHobbies,
    TourismTravel,
    Handicraft,
    Motoring,
    FitnessHealth,
    Cooking,
    AdvertisementShopping,
    Gardening,
}

impl EtsiCategory {
    /// English name and Hungarian translation
    pub fn names(self) -> (&'static str, &'static str) {
        match self {
            Self::MovieDrama => ("Movie/Drama", "Film/Dráma"),
            Self::DetectiveThriller => ("Detective/Thriller", "Bűnügyi/Thriller"),
            Self::AdventureWesternWar => ("Adventure/Western/War", "Kaland/Western/Háborús"),
            Self::SciencefictionFantasyHorror => ("Science fiction/Fantasy/Horror", "Sci-fi/Fantasy/Horror"),
            Self::Comedy => ("Comedy", "Vígjáték"),
            Self::SoapMelodramaFolkloric => ("Soap/Melodrama/Folkloric", "Szappanopera/Melodráma/Folklór"),
            Self::Romance => ("Romance", "Romantikus"),
            Self::SeriousClassicalReligiousHistoricalMovieDrama => ("Serious/Classical/Religious/Historical movie/drama", "Komoly/Klasszikus/Vallási/Történelmi/Dráma"),
            Self::AdultMovieDrama => ("Adult movie/drama", "Felnőtt film/dráma"),
            Self::NewsCurrentaffairs => ("News/Current affairs", "Hírek/Aktualitások"),
            Self::NewsWeatherreport => ("News/Weather report", "Hírek/Időjárásjelentés"),
            Self::NewsMagazine => ("News Magazine", "Hírmagazin"),
            Self::Documentary => ("Documentary", "Dokumentum"),
            Self::DiscussionInterviewDebate => ("Discussion/Interview/Debate", "Beszélgetés/Interjú/Vita"),
            Self::ShowGameshow => ("Show/Game show", "Show/Játék show"),
            Self::GameshowQuizContest => ("Game show/Quiz/Contest", "Játék show/Kvíz/Verseny"),
            Self::Varietyshow => ("Variety Show", "Revü"),
            Self::Talkshow => ("Talk show", "Beszélgetős műsor"),
            Self::Sports => ("Sports", "Sport"),
            Self::Specialevents => ("Special events", "Különleges esemény"),
            Self::Sportsmagazines => ("Sports magazines", "Sport magazin"),
            Self::FootballSoccer => ("Football/Soccer", "Labdarúgás"),
            Self::TennisSquash => ("Tennis/Squash", "Tenisz/Squash"),
            Self::Teamsports => ("Team sports", "Csapatsport"),
            Self::Athletics => ("Athletics", "Atlétika"),
            Self::Motorsport => ("Motor sport", "Motorsport"),
            Self::Watersport => ("Water sport", "Vízisport"),
            Self::Wintersports => ("Winter sports", "Téli sport"),
            Self::Equestrian => ("Equestrian", "Lovas"),
            Self::Martialsports => ("Martial sports", "Harci sport"),
            Self::ChildrensYouthProgrammes => ("Children's/Youth programmes", "Gyerek/Ifjúsági program"),
            Self::PreschoolChildrensProgrammes => ("Pre-school children's programmes", "Óvodás program"),
            Self::EntertainmentProgrammesFor6to14 => ("Entertainment programmes for 6 to 14", "Szórakoztató program 6-14 éveseknek"),
            Self::EntertainmentProgrammesFor10to16 => ("Entertainment programmes for 10 to 16", "Szórakoztató program 10-16 éveseknek"),
            Self::InformationalEducationalSchoolProgrammes => ("Informational/Educational/School programme", "Információs/Oktató/Iskolai program"),
            Self::CartoonsPuppets => ("Cartoons/Puppets", "Animációs/Báb"),
            Self::MusicBalletDance => ("Music/Ballet/Dance", "Zene/Balett/Tánc"),
            Self::RockPop => ("Rock/Pop", "Rock/Pop"),
            Self::SeriousmusicClassicalmusic => ("Serious Music/Classical music", "Komoly/Klasszikus zene"),
            Self::FolkTraditionalmusic => ("Folk/Traditional music", "Népzene/Hagyományos zene"),
            Self::Jazz => ("Jazz", "Jazz"),
            Self::MusicalOpera => ("Musical/Opera", "Musical/Opera"),
            Self::Ballet => ("Ballet", "Balett"),
            Self::ArtsCulture => ("Arts/Culture", "Művészet/Kultúra"),
            Self::Performingarts => ("Performing arts", "Előadóművészet"),
            Self::Finearts => ("Fine arts", "Képzőművészet"),
            Self::Religion => ("Religion", "Vallás"),
            Self::PopularcultureTraditionalarts => ("Popular culture/Traditional arts", "Popkultúra/Hagyományos művészetek"),
            Self::Literature => ("Literature", "Irodalom"),
            Self::FilmCinema => ("Film/Cinema", "Film/Mozi"),
            Self::ExperimentalfilmVideo => ("Experimental film/video", "Kísérleti film/Videó"),
            Self::BroadcastingPress => ("Broadcasting/Press", "Közvetítés/Sajtó"),
            Self::Newmedia => ("New Media", "Új Média"),
            Self::ArtsCultureMagazines => ("Arts/Culture magazines", "Művészeti/Kulturális magazin"),
            Self::Fashion => ("Fashion", "Divat"),
            Self::SocialPoliticalissuesEconomics => ("Social/Political issues/Economics", "Szociális/Politikai/Gazdasági"),
            Self::MagazinesReportsDocumentary => ("Magazines/Reports/Documentary", "Magazinok/Riportok/Dokumentumfilm"),
            Self::EconomicsSocialAdvisory => ("Economics/Social advisory", "Gazdasági/Szociális tanácsadó"),
            Self::RemarkablePeople => ("Remarkable People", "Híres Emberek"),
            Self::EducationScienceFactual => ("Education/Science/Factual", "Oktatás/Tudomány/Tényfeltáró"),
            Self::NatureAnimalsEnvironment => ("Nature/Animals/Environment", "Természet/Állatok/Környezet"),
            Self::TechnologyNaturalsciences => ("Technology/Natural sciences", "Technika/Természettudományi"),
            Self::MedicinePhysiologyPsychology => ("Medicine/Physiology/Psychology", "Orvosi/Élettani/Pszichológiai"),
            Self::ForeigncountriesExpeditions => ("Foreign Countries/Expeditions", "Idegen Országok/Felfedező utak"),
            Self::SocialSpiritualsciences => ("Social/Spiritual sciences", "Szociális/Lélek tudományok"),
            Self::Furthereducation => ("Further Education", "Továbbtanulás"),
            Self::Languages => ("Languages", "Nyelvek"),
            Self::LeisureHobbies => ("Leisure/Hobbies", "Szabadidő/Hobbi"),
            Self::TourismTravel => ("Tourism/Travel", "Turizmus/Utazás"),
            Self::Handicraft => ("Handicraft", "Kézművesség"),
            Self::Motoring => ("Motoring", "Autózás"),
            Self::FitnessHealth => ("Fitness & health", "Fitnesz & Egészség"),
            Self::Cooking => ("Cooking", "Főzés"),
            Self::AdvertisementShopping => ("Advertisement/Shopping", "Hirdetés/Vásárlás"),
            Self::Gardening => ("Gardening", "Kertészkedés"),
        }
    }

    pub fn english(self) -> &'static str {
        self.names().0
    }

    pub fn hungarian(self) -> &'static str {
        self.names().1
    }
}

/// Exact-match lookup of a port.hu genre label
///
/// Labels are case-sensitive as published by the provider.
pub fn lookup(label: &str) -> Option<EtsiCategory> {
    use EtsiCategory::*;

    let category = match label {
        "akció-horror" => SciencefictionFantasyHorror,
        "akció-vígjáték" => Comedy,
        "akciófilm" => MovieDrama,
        "akciófilm-sorozat" => MovieDrama,
        "akcióthriller" => DetectiveThriller,
        "akcióvígjáték-sorozat" => Comedy,
        "animációs akciósorozat" => MovieDrama,
        "animációs film" => MovieDrama,
        "animációs kalandfilm" => MovieDrama,
        "animációs minisorozat" => MovieDrama,
        "animációs rövidfilm" => MovieDrama,
        "animációs sorozat" => MovieDrama,
        "animációs vígjáték" => MovieDrama,
        "animációs vígjátéksorozat" => MovieDrama,
        "autós magazin" => Motoring,
        "bábfilm" => CartoonsPuppets,
        "bábfilmsorozat" => CartoonsPuppets,
        "bűnügyi film" => DetectiveThriller,
        "bűnügyi tévéfilmsorozat" => DetectiveThriller,
        "családi animációs film" => ChildrensYouthProgrammes,
        "családi film" => ChildrensYouthProgrammes,
        "családi filmsorozat" => ChildrensYouthProgrammes,
        "családi kalandfilm" => ChildrensYouthProgrammes,
        "családi vígjáték" => ChildrensYouthProgrammes,
        "dokumentum játékfilm" => MovieDrama,
        "dokumentumfilm" => EducationScienceFactual,
        "dokumentumfilm összeállítás" => EducationScienceFactual,
        "dokumentumfilm sorozat" => EducationScienceFactual,
        "dokureality-sorozat" => ShowGameshow,
        "dokusorozat" => EducationScienceFactual,
        "dráma" => MovieDrama,
        "dráma minisorozat" => MovieDrama,
        "drámasorozat" => MovieDrama,
        "életmódmagazin" => LeisureHobbies,
        "életrajzi dráma" => MagazinesReportsDocumentary,
        "életrajzi film" => MagazinesReportsDocumentary,
        "életrajzi minisorozat" => MagazinesReportsDocumentary,
        "erotikus-thriller" => AdultMovieDrama,
        "extrém vetélkedő" => GameshowQuizContest,
        "fantasy" => SciencefictionFantasyHorror,
        "fantasy sorozat" => SciencefictionFantasyHorror,
        "fantasztikus akciófilm" => SciencefictionFantasyHorror,
        "fantasztikus film" => SciencefictionFantasyHorror,
        "fantasztikus kalandfilm" => AdventureWesternWar,
        "fantasztikus thriller" => DetectiveThriller,
        "fekete komédia" => Comedy,
        "fikciós dokumentumfilm" => EducationScienceFactual,
        "film" => MovieDrama,
        "filmdráma" => MovieDrama,
        "filmesszé" => MovieDrama,
        "filmetűd" => MovieDrama,
        "filmsorozat" => MovieDrama,
        "filmszatíra" => MovieDrama,
        "főzős műsor" => Cooking,
        "főzőshow" => ShowGameshow,
        "gála" => MusicBalletDance,
        "gasztro-reality" => ShowGameshow,
        "gasztronómiai műsor" => Cooking,
        "gasztroshow" => Cooking,
        "gazdasági műsor" => SocialPoliticalissuesEconomics,
        "gengszterfilm" => DetectiveThriller,
        "gyerekfilm sorozat" => ChildrensYouthProgrammes,
        "gyerekműsor" => ChildrensYouthProgrammes,
        "gyermekfilm" => ChildrensYouthProgrammes,
        "háborús filmdráma" => AdventureWesternWar,
        "háborús minisorozat" => AdventureWesternWar,
        "háborús vígjáték" => AdventureWesternWar,
        "hírműsor" => NewsCurrentaffairs,
        "horror" => SciencefictionFantasyHorror,
        "horror-dráma" => MovieDrama,
        "horror-vígjáték" => Comedy,
        "horrorsorozat" => SciencefictionFantasyHorror,
        "ifjúsági film" => ChildrensYouthProgrammes,
        "ifjúsági filmsorozat" => ChildrensYouthProgrammes,
        "ifjúsági kalandfilm" => ChildrensYouthProgrammes,
        "ifjúsági kalandfilmsorozat" => ChildrensYouthProgrammes,
        "ifjúsági vígjáték" => Comedy,
        "Információs műsor" => DiscussionInterviewDebate,
        "interaktív filmsorozat" => MovieDrama,
        "ismeretterjesztő film" => EducationScienceFactual,
        "ismeretterjesztő filmsorozat" => EducationScienceFactual,
        "ismeretterjesztő magazin" => MagazinesReportsDocumentary,
        "ismeretterjesztő műsor" => EducationScienceFactual,
        "Ismeretterjesztő sorozat" => EducationScienceFactual,
        "játékfilm" => MovieDrama,
        "kabaréshow" => ShowGameshow,
        "kaland minisorozat" => AdventureWesternWar,
        "kalandfilm" => AdventureWesternWar,
        "kalandfilmsorozat" => AdventureWesternWar,
        "karatefilm" => MovieDrama,
        "katasztrófa film" => SeriousClassicalReligiousHistoricalMovieDrama,
        "kísérleti film" => ExperimentalfilmVideo,
        "kisfilm-összeállítás" => MovieDrama,
        "kisjátékfilm" => MovieDrama,
        "komédia" => Comedy,
        "komédia sorozat" => Comedy,
        "komolyzenei film" => SeriousmusicClassicalmusic,
        "komolyzenei műsor" => SeriousmusicClassicalmusic,
        "koncertfilm" => MusicBalletDance,
        "közéleti-kulturális magazin" => DiscussionInterviewDebate,
        "közlekedésbiztonsági sorozat" => NewsCurrentaffairs,
        "krimi" => DetectiveThriller,
        "krimi minisorozat" => DetectiveThriller,
        "krimi vígjáték" => Comedy,
        "krimi-dráma" => MovieDrama,
        "krimi-vígjáték" => Comedy,
        "krimisorozat" => DetectiveThriller,
        "kulináris krimi" => DetectiveThriller,
        "kulturális magazin" => MagazinesReportsDocumentary,
        "kvíz-show" => GameshowQuizContest,
        "magazinműsor" => MagazinesReportsDocumentary,
        "melodráma" => SoapMelodramaFolkloric,
        "mesefilm" => ChildrensYouthProgrammes,
        "mesejáték" => ChildrensYouthProgrammes,
        "mesesorozat" => ChildrensYouthProgrammes,
        "miniportré-sorozat" => MagazinesReportsDocumentary,
        "minisorozat" => MovieDrama,
        "misztikus film" => SciencefictionFantasyHorror,
        "misztikus sorozat" => SciencefictionFantasyHorror,
        "misztikus thriller" => DetectiveThriller,
        "musical" => MusicalOpera,
        "műveltségi vetélkedő" => GameshowQuizContest,
        "művészeti magazin" => ArtsCultureMagazines,
        "művészeti műsor" => ArtsCulture,
        "művészeti portésorozat" => ArtsCultureMagazines,
        "opera" => MusicalOpera,
        "operafilm" => MusicalOpera,
        "operettfilm" => MusicalOpera,
        "párkapcsolati kalauz" => AdultMovieDrama,
        "politikai dráma" => MovieDrama,
        "politikai műsor" => SocialPoliticalissuesEconomics,
        "politikai thriller" => DetectiveThriller,
        "portréfilm" => MagazinesReportsDocumentary,
        "pszichothriller" => DetectiveThriller,
        "rajzfilm" => ChildrensYouthProgrammes,
        "rajzfilm összeállítás" => ChildrensYouthProgrammes,
        "rajzfilm sorozat" => ChildrensYouthProgrammes,
        "reality műsor" => GameshowQuizContest,
        "reality show" => GameshowQuizContest,
        "reality vígjátéksorozat" => GameshowQuizContest,
        "reality-sorozat" => GameshowQuizContest,
        "reklámfilm" => AdvertisementShopping,
        "riportfilm" => MagazinesReportsDocumentary,
        "riportfilm-sorozat" => MagazinesReportsDocumentary,
        "riportműsor" => MagazinesReportsDocumentary,
        "road movie" => MovieDrama,
        "romantikus dráma" => Romance,
        "romantikus film" => Romance,
        "romantikus kalandfilm" => AdventureWesternWar,
        "romantikus komédia" => Comedy,
        "romantikus sorozat" => Romance,
        "romantikus thriller" => DetectiveThriller,
        "romantikus vígjáték" => Comedy,
        "rövidfilm" => MovieDrama,
        "rövidfilm összeállítás" => MovieDrama,
        "rövidfilmsorozat" => MovieDrama,
        "sci-fi" => SciencefictionFantasyHorror,
        "sci-fi akciófilm" => SciencefictionFantasyHorror,
        "sci-fi dráma" => SciencefictionFantasyHorror,
        "sci-fi kalandfilm" => AdventureWesternWar,
        "sci-fi sorozat" => SciencefictionFantasyHorror,
        "sci-fi vígjáték" => Comedy,
        "show műsor" => ShowGameshow,
        "show-műsor" => ShowGameshow,
        "sportfilm" => Sports,
        "sportműsor" => Sports,
        "stand-up comedy" => Comedy,
        "szabadidős műsor" => LeisureHobbies,
        "szappanopera" => SoapMelodramaFolkloric,
        "szatíra" => MovieDrama,
        "szatirikus vígjáték" => MovieDrama,
        "szélhámosfilm" => MovieDrama,
        "színházi felvétel" => ArtsCulture,
        "színházi közvetítés" => ArtsCulture,
        "színházi magazin" => ArtsCultureMagazines,
        "szórakoztató műsor" => Comedy,
        "szórakoztató sorozat" => Comedy,
        "szórakoztató vetélkedő" => GameshowQuizContest,
        "talk show" => Talkshow,
        "telenovella" => MovieDrama,
        "televíziós vásárlási műsorablak" => AdvertisementShopping,
        "természetfilm" => NatureAnimalsEnvironment,
        "természetfilm sorozat" => NatureAnimalsEnvironment,
        "tévéfilm" => MovieDrama,
        "tévéfilmsorozat" => MovieDrama,
        "tévéjáték" => MovieDrama,
        "thriller" => DetectiveThriller,
        "thriller minisorozat" => DetectiveThriller,
        "thrillersorozat" => DetectiveThriller,
        "történelmi dokumentumfilm" => EducationScienceFactual,
        "történelmi dokumentumfilm-sorozat" => EducationScienceFactual,
        "történelmi dráma" => SeriousClassicalReligiousHistoricalMovieDrama,
        "történelmi film" => SeriousClassicalReligiousHistoricalMovieDrama,
        "történelmi filmsorozat" => SeriousClassicalReligiousHistoricalMovieDrama,
        "történelmi kalandfilm" => AdventureWesternWar,
        "történelmi sorozat" => SeriousClassicalReligiousHistoricalMovieDrama,
        "történelmi vígjáték" => Comedy,
        "tragikomédia" => Comedy,
        "útifilm" => ForeigncountriesExpeditions,
        "útifilm-sorozat" => ForeigncountriesExpeditions,
        "vallási műsor" => Religion,
        "valóságshow" => GameshowQuizContest,
        "versösszeállítás" => Literature,
        "vetélkedő" => GameshowQuizContest,
        "videófilmösszeállítás" => MovieDrama,
        "videóklipek" => MovieDrama,
        "vígjáték" => Comedy,
        "vígjátéksorozat" => Comedy,
        "vígopera" => MusicalOpera,
        "werkfilm" => MovieDrama,
        "western" => AdventureWesternWar,
        "western-vígjáték" => Comedy,
        "westernsorozat" => AdventureWesternWar,
        "zenefilm" => MusicBalletDance,
        "zenei sorozat" => MusicBalletDance,
        "zenés dráma" => MovieDrama,
        "zenés film" => MovieDrama,
        "zenés műsor" => MusicBalletDance,
        "zenés vígjáték" => Comedy,
        _ => return None,
    };
    Some(category)
}

/// Whether `label` is a known genre label
pub fn is_category(label: &str) -> bool {
    lookup(label).is_some()
}
