//! IPTC dataset identifiers and their registry entries
//!
//! A tag combines the IIM record number and dataset number into one 16-bit value
//! (`record << 8 | dataset`). Only the application record (2) is described by the
//! registry; datasets of other records are carried as opaque strings.

use std::fmt;

/// Logical data type of an IPTC dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IptcDataType {
    /// Free text in the value's encoding
    String,
    /// `CCYYMMDD`
    Date,
    /// `HHMMSS±HHMM`
    Time,
    /// Binary big-endian 16-bit number
    UnsignedShort,
}

/// Registry entry for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IptcTagInfo {
    /// Display name
    pub name: &'static str,
    /// Declared data type
    pub data_type: IptcDataType,
    /// Whether the dataset may occur more than once
    pub repeatable: bool,
}

/// IPTC tag (record + dataset number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IptcTag(pub u16);

impl IptcTag {
    /// Record number of the application record
    pub const APPLICATION_RECORD: u8 = 2;

    /// Create from record and dataset numbers
    pub const fn new(record: u8, dataset: u8) -> Self {
        Self(((record as u16) << 8) | dataset as u16)
    }

    const fn application(dataset: u8) -> Self {
        Self::new(Self::APPLICATION_RECORD, dataset)
    }

    /// Custom field `n` (1..=20) of the application record
    pub fn custom_field(n: u8) -> Option<Self> {
        (1..=20).contains(&n).then(|| Self::application(199 + n))
    }

    /// IIM record number
    pub const fn record(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// IIM dataset number
    pub const fn dataset(&self) -> u8 {
        self.0 as u8
    }

    // Application record datasets
    pub const RECORD_VERSION: Self = Self::application(0);
    pub const OBJECT_TYPE: Self = Self::application(3);
    pub const OBJECT_ATTRIBUTE: Self = Self::application(4);
    pub const TITLE: Self = Self::application(5);
    pub const EDIT_STATUS: Self = Self::application(7);
    pub const EDITORIAL_UPDATE: Self = Self::application(8);
    pub const PRIORITY: Self = Self::application(10);
    pub const SUBJECT_REFERENCE: Self = Self::application(12);
    pub const CATEGORY: Self = Self::application(15);
    pub const SUPPLEMENTAL_CATEGORIES: Self = Self::application(20);
    pub const FIXTURE_IDENTIFIER: Self = Self::application(22);
    pub const KEYWORD: Self = Self::application(25);
    pub const LOCATION_CODE: Self = Self::application(26);
    pub const LOCATION_NAME: Self = Self::application(27);
    pub const RELEASE_DATE: Self = Self::application(30);
    pub const RELEASE_TIME: Self = Self::application(35);
    pub const EXPIRATION_DATE: Self = Self::application(37);
    pub const EXPIRATION_TIME: Self = Self::application(38);
    pub const SPECIAL_INSTRUCTIONS: Self = Self::application(40);
    pub const ACTION_ADVISED: Self = Self::application(42);
    pub const REFERENCE_SERVICE: Self = Self::application(45);
    pub const REFERENCE_DATE: Self = Self::application(47);
    pub const REFERENCE_NUMBER: Self = Self::application(50);
    pub const CREATED_DATE: Self = Self::application(55);
    pub const CREATED_TIME: Self = Self::application(60);
    pub const DIGITAL_CREATION_DATE: Self = Self::application(62);
    pub const DIGITAL_CREATION_TIME: Self = Self::application(63);
    pub const ORIGINATING_PROGRAM: Self = Self::application(65);
    pub const PROGRAM_VERSION: Self = Self::application(70);
    pub const OBJECT_CYCLE: Self = Self::application(75);
    pub const BYLINE: Self = Self::application(80);
    pub const BYLINE_TITLE: Self = Self::application(85);
    pub const CITY: Self = Self::application(90);
    pub const SUB_LOCATION: Self = Self::application(92);
    pub const PROVINCE_STATE: Self = Self::application(95);
    pub const COUNTRY_CODE: Self = Self::application(100);
    pub const COUNTRY: Self = Self::application(101);
    pub const ORIGINAL_TRANSMISSION_REFERENCE: Self = Self::application(103);
    pub const HEADLINE: Self = Self::application(105);
    pub const CREDIT: Self = Self::application(110);
    pub const SOURCE: Self = Self::application(115);
    pub const COPYRIGHT_NOTICE: Self = Self::application(116);
    pub const CONTACT: Self = Self::application(118);
    pub const CAPTION: Self = Self::application(120);
    pub const LOCAL_CAPTION: Self = Self::application(121);
    pub const CAPTION_WRITER: Self = Self::application(122);
    pub const IMAGE_TYPE: Self = Self::application(130);
    pub const IMAGE_ORIENTATION: Self = Self::application(131);

    /// Registry entry, if the dataset is known
    pub fn info(&self) -> Option<IptcTagInfo> {
        use IptcDataType::{Date, String, Time, UnsignedShort};

        if self.record() != Self::APPLICATION_RECORD {
            return None;
        }

        let (name, data_type, repeatable) = match self.dataset() {
            0 => ("RecordVersion", UnsignedShort, false),
            3 => ("ObjectType", String, false),
            4 => ("ObjectAttribute", String, true),
            5 => ("Title", String, false),
            7 => ("EditStatus", String, false),
            8 => ("EditorialUpdate", String, false),
            10 => ("Priority", String, false),
            12 => ("SubjectReference", String, true),
            15 => ("Category", String, false),
            20 => ("SupplementalCategories", String, true),
            22 => ("FixtureIdentifier", String, false),
            25 => ("Keyword", String, true),
            26 => ("LocationCode", String, true),
            27 => ("LocationName", String, true),
            30 => ("ReleaseDate", Date, false),
            35 => ("ReleaseTime", Time, false),
            37 => ("ExpirationDate", Date, false),
            38 => ("ExpirationTime", Time, false),
            40 => ("SpecialInstructions", String, false),
            42 => ("ActionAdvised", String, false),
            45 => ("ReferenceService", String, true),
            47 => ("ReferenceDate", Date, true),
            50 => ("ReferenceNumber", String, true),
            55 => ("CreatedDate", Date, false),
            60 => ("CreatedTime", Time, false),
            62 => ("DigitalCreationDate", Date, false),
            63 => ("DigitalCreationTime", Time, false),
            65 => ("OriginatingProgram", String, false),
            70 => ("ProgramVersion", String, false),
            75 => ("ObjectCycle", String, false),
            80 => ("Byline", String, true),
            85 => ("BylineTitle", String, true),
            90 => ("City", String, false),
            92 => ("SubLocation", String, false),
            95 => ("ProvinceState", String, false),
            100 => ("CountryCode", String, false),
            101 => ("Country", String, false),
            103 => ("OriginalTransmissionReference", String, false),
            105 => ("Headline", String, false),
            110 => ("Credit", String, false),
            115 => ("Source", String, false),
            116 => ("CopyrightNotice", String, false),
            118 => ("Contact", String, true),
            120 => ("Caption", String, false),
            121 => ("LocalCaption", String, true),
            122 => ("CaptionWriter", String, true),
            130 => ("ImageType", String, false),
            131 => ("ImageOrientation", String, false),
            n @ 200..=219 => (CUSTOM_FIELD_NAMES[usize::from(n - 200)], String, false),
            _ => return None,
        };

        Some(IptcTagInfo {
            name,
            data_type,
            repeatable,
        })
    }

    /// Whether the registry allows several values for this tag
    pub fn is_repeatable(&self) -> bool {
        self.info().is_some_and(|info| info.repeatable)
    }

    /// Whether the tag holds a `CCYYMMDD` date
    pub fn is_date(&self) -> bool {
        self.info().is_some_and(|info| info.data_type == IptcDataType::Date)
    }

    /// Whether the tag holds a `HHMMSS±HHMM` time
    pub fn is_time(&self) -> bool {
        self.info().is_some_and(|info| info.data_type == IptcDataType::Time)
    }

    /// Registry name of the tag
    pub fn name(&self) -> Option<&'static str> {
        self.info().map(|info| info.name)
    }
}

impl fmt::Display for IptcTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}:{}", self.record(), self.dataset()),
        }
    }
}

const CUSTOM_FIELD_NAMES: [&str; 20] = [
    "CustomField1",
    "CustomField2",
    "CustomField3",
    "CustomField4",
    "CustomField5",
    "CustomField6",
    "CustomField7",
    "CustomField8",
    "CustomField9",
    "CustomField10",
    "CustomField11",
    "CustomField12",
    "CustomField13",
    "CustomField14",
    "CustomField15",
    "CustomField16",
    "CustomField17",
    "CustomField18",
    "CustomField19",
    "CustomField20",
];

/// Every dataset of the application record known to the registry
pub fn known_tags() -> impl Iterator<Item = IptcTag> {
    (0..=u8::MAX)
        .map(IptcTag::application)
        .filter(|tag| tag.info().is_some())
}
