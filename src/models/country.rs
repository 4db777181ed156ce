//! ISO 3166-1 country table used to normalize the `Origin` column.

/// One ISO 3166-1 entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
}

const fn c(
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
) -> Country {
    Country {
        name,
        alpha2,
        alpha3,
        numeric,
    }
}

pub static COUNTRIES: &[Country] = &[
    c("Afghanistan", "AF", "AFG", "004"),
    c("Åland Islands", "AX", "ALA", "248"),
    c("Albania", "AL", "ALB", "008"),
    c("Algeria", "DZ", "DZA", "012"),
    c("American Samoa", "AS", "ASM", "016"),
    c("Andorra", "AD", "AND", "020"),
    c("Angola", "AO", "AGO", "024"),
    c("Anguilla", "AI", "AIA", "660"),
    c("Antarctica", "AQ", "ATA", "010"),
    c("Antigua and Barbuda", "AG", "ATG", "028"),
    c("Argentina", "AR", "ARG", "032"),
    c("Armenia", "AM", "ARM", "051"),
    c("Aruba", "AW", "ABW", "533"),
    c("Australia", "AU", "AUS", "036"),
    c("Austria", "AT", "AUT", "040"),
    c("Azerbaijan", "AZ", "AZE", "031"),
    c("Bahamas", "BS", "BHS", "044"),
    c("Bahrain", "BH", "BHR", "048"),
    c("Bangladesh", "BD", "BGD", "050"),
    c("Barbados", "BB", "BRB", "052"),
    c("Belarus", "BY", "BLR", "112"),
    c("Belgium", "BE", "BEL", "056"),
    c("Belize", "BZ", "BLZ", "084"),
    c("Benin", "BJ", "BEN", "204"),
    c("Bermuda", "BM", "BMU", "060"),
    c("Bhutan", "BT", "BTN", "064"),
    c("Bolivia, Plurinational State of", "BO", "BOL", "068"),
    c("Bonaire, Sint Eustatius and Saba", "BQ", "BES", "535"),
    c("Bosnia and Herzegovina", "BA", "BIH", "070"),
    c("Botswana", "BW", "BWA", "072"),
    c("Bouvet Island", "BV", "BVT", "074"),
    c("Brazil", "BR", "BRA", "076"),
    c("British Indian Ocean Territory", "IO", "IOT", "086"),
    c("Brunei Darussalam", "BN", "BRN", "096"),
    c("Bulgaria", "BG", "BGR", "100"),
    c("Burkina Faso", "BF", "BFA", "854"),
    c("Burundi", "BI", "BDI", "108"),
    c("Cambodia", "KH", "KHM", "116"),
    c("Cameroon", "CM", "CMR", "120"),
    c("Canada", "CA", "CAN", "124"),
    c("Cabo Verde", "CV", "CPV", "132"),
    c("Cayman Islands", "KY", "CYM", "136"),
    c("Central African Republic", "CF", "CAF", "140"),
    c("Chad", "TD", "TCD", "148"),
    c("Chile", "CL", "CHL", "152"),
    c("China", "CN", "CHN", "156"),
    c("Christmas Island", "CX", "CXR", "162"),
    c("Cocos (Keeling) Islands", "CC", "CCK", "166"),
    c("Colombia", "CO", "COL", "170"),
    c("Comoros", "KM", "COM", "174"),
    c("Congo", "CG", "COG", "178"),
    c("Congo, Democratic Republic of the", "CD", "COD", "180"),
    c("Cook Islands", "CK", "COK", "184"),
    c("Costa Rica", "CR", "CRI", "188"),
    c("Côte d'Ivoire", "CI", "CIV", "384"),
    c("Croatia", "HR", "HRV", "191"),
    c("Cuba", "CU", "CUB", "192"),
    c("Curaçao", "CW", "CUW", "531"),
    c("Cyprus", "CY", "CYP", "196"),
    c("Czechia", "CZ", "CZE", "203"),
    c("Denmark", "DK", "DNK", "208"),
    c("Djibouti", "DJ", "DJI", "262"),
    c("Dominica", "DM", "DMA", "212"),
    c("Dominican Republic", "DO", "DOM", "214"),
    c("Ecuador", "EC", "ECU", "218"),
    c("Egypt", "EG", "EGY", "818"),
    c("El Salvador", "SV", "SLV", "222"),
    c("Equatorial Guinea", "GQ", "GNQ", "226"),
    c("Eritrea", "ER", "ERI", "232"),
    c("Estonia", "EE", "EST", "233"),
    c("Eswatini", "SZ", "SWZ", "748"),
    c("Ethiopia", "ET", "ETH", "231"),
    c("Falkland Islands (Malvinas)", "FK", "FLK", "238"),
    c("Faroe Islands", "FO", "FRO", "234"),
    c("Fiji", "FJ", "FJI", "242"),
    c("Finland", "FI", "FIN", "246"),
    c("France", "FR", "FRA", "250"),
    c("French Guiana", "GF", "GUF", "254"),
    c("French Polynesia", "PF", "PYF", "258"),
    c("French Southern Territories", "TF", "ATF", "260"),
    c("Gabon", "GA", "GAB", "266"),
    c("Gambia", "GM", "GMB", "270"),
    c("Georgia", "GE", "GEO", "268"),
    c("Germany", "DE", "DEU", "276"),
    c("Ghana", "GH", "GHA", "288"),
    c("Gibraltar", "GI", "GIB", "292"),
    c("Greece", "GR", "GRC", "300"),
    c("Greenland", "GL", "GRL", "304"),
    c("Grenada", "GD", "GRD", "308"),
    c("Guadeloupe", "GP", "GLP", "312"),
    c("Guam", "GU", "GUM", "316"),
    c("Guatemala", "GT", "GTM", "320"),
    c("Guernsey", "GG", "GGY", "831"),
    c("Guinea", "GN", "GIN", "324"),
    c("Guinea-Bissau", "GW", "GNB", "624"),
    c("Guyana", "GY", "GUY", "328"),
    c("Haiti", "HT", "HTI", "332"),
    c("Heard Island and McDonald Islands", "HM", "HMD", "334"),
    c("Holy See", "VA", "VAT", "336"),
    c("Honduras", "HN", "HND", "340"),
    c("Hong Kong", "HK", "HKG", "344"),
    c("Hungary", "HU", "HUN", "348"),
    c("Iceland", "IS", "ISL", "352"),
    c("India", "IN", "IND", "356"),
    c("Indonesia", "ID", "IDN", "360"),
    c("Iran, Islamic Republic of", "IR", "IRN", "364"),
    c("Iraq", "IQ", "IRQ", "368"),
    c("Ireland", "IE", "IRL", "372"),
    c("Isle of Man", "IM", "IMN", "833"),
    c("Israel", "IL", "ISR", "376"),
    c("Italy", "IT", "ITA", "380"),
    c("Jamaica", "JM", "JAM", "388"),
    c("Japan", "JP", "JPN", "392"),
    c("Jersey", "JE", "JEY", "832"),
    c("Jordan", "JO", "JOR", "400"),
    c("Kazakhstan", "KZ", "KAZ", "398"),
    c("Kenya", "KE", "KEN", "404"),
    c("Kiribati", "KI", "KIR", "296"),
    c("Korea, Democratic People's Republic of", "KP", "PRK", "408"),
    c("Korea, Republic of", "KR", "KOR", "410"),
    c("Kuwait", "KW", "KWT", "414"),
    c("Kyrgyzstan", "KG", "KGZ", "417"),
    c("Lao People's Democratic Republic", "LA", "LAO", "418"),
    c("Latvia", "LV", "LVA", "428"),
    c("Lebanon", "LB", "LBN", "422"),
    c("Lesotho", "LS", "LSO", "426"),
    c("Liberia", "LR", "LBR", "430"),
    c("Libya", "LY", "LBY", "434"),
    c("Liechtenstein", "LI", "LIE", "438"),
    c("Lithuania", "LT", "LTU", "440"),
    c("Luxembourg", "LU", "LUX", "442"),
    c("Macao", "MO", "MAC", "446"),
    c("North Macedonia", "MK", "MKD", "807"),
    c("Madagascar", "MG", "MDG", "450"),
    c("Malawi", "MW", "MWI", "454"),
    c("Malaysia", "MY", "MYS", "458"),
    c("Maldives", "MV", "MDV", "462"),
    c("Mali", "ML", "MLI", "466"),
    c("Malta", "MT", "MLT", "470"),
    c("Marshall Islands", "MH", "MHL", "584"),
    c("Martinique", "MQ", "MTQ", "474"),
    c("Mauritania", "MR", "MRT", "478"),
    c("Mauritius", "MU", "MUS", "480"),
    c("Mayotte", "YT", "MYT", "175"),
    c("Mexico", "MX", "MEX", "484"),
    c("Micronesia, Federated States of", "FM", "FSM", "583"),
    c("Moldova, Republic of", "MD", "MDA", "498"),
    c("Monaco", "MC", "MCO", "492"),
    c("Mongolia", "MN", "MNG", "496"),
    c("Montenegro", "ME", "MNE", "499"),
    c("Montserrat", "MS", "MSR", "500"),
    c("Morocco", "MA", "MAR", "504"),
    c("Mozambique", "MZ", "MOZ", "508"),
    c("Myanmar", "MM", "MMR", "104"),
    c("Namibia", "NA", "NAM", "516"),
    c("Nauru", "NR", "NRU", "520"),
    c("Nepal", "NP", "NPL", "524"),
    c("Netherlands", "NL", "NLD", "528"),
    c("New Caledonia", "NC", "NCL", "540"),
    c("New Zealand", "NZ", "NZL", "554"),
    c("Nicaragua", "NI", "NIC", "558"),
    c("Niger", "NE", "NER", "562"),
    c("Nigeria", "NG", "NGA", "566"),
    c("Niue", "NU", "NIU", "570"),
    c("Norfolk Island", "NF", "NFK", "574"),
    c("Northern Mariana Islands", "MP", "MNP", "580"),
    c("Norway", "NO", "NOR", "578"),
    c("Oman", "OM", "OMN", "512"),
    c("Pakistan", "PK", "PAK", "586"),
    c("Palau", "PW", "PLW", "585"),
    c("Palestine, State of", "PS", "PSE", "275"),
    c("Panama", "PA", "PAN", "591"),
    c("Papua New Guinea", "PG", "PNG", "598"),
    c("Paraguay", "PY", "PRY", "600"),
    c("Peru", "PE", "PER", "604"),
    c("Philippines", "PH", "PHL", "608"),
    c("Pitcairn", "PN", "PCN", "612"),
    c("Poland", "PL", "POL", "616"),
    c("Portugal", "PT", "PRT", "620"),
    c("Puerto Rico", "PR", "PRI", "630"),
    c("Qatar", "QA", "QAT", "634"),
    c("Réunion", "RE", "REU", "638"),
    c("Romania", "RO", "ROU", "642"),
    c("Russian Federation", "RU", "RUS", "643"),
    c("Rwanda", "RW", "RWA", "646"),
    c("Saint Barthélemy", "BL", "BLM", "652"),
    c("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN", "654"),
    c("Saint Kitts and Nevis", "KN", "KNA", "659"),
    c("Saint Lucia", "LC", "LCA", "662"),
    c("Saint Martin (French part)", "MF", "MAF", "663"),
    c("Saint Pierre and Miquelon", "PM", "SPM", "666"),
    c("Saint Vincent and the Grenadines", "VC", "VCT", "670"),
    c("Samoa", "WS", "WSM", "882"),
    c("San Marino", "SM", "SMR", "674"),
    c("Sao Tome and Principe", "ST", "STP", "678"),
    c("Saudi Arabia", "SA", "SAU", "682"),
    c("Senegal", "SN", "SEN", "686"),
    c("Serbia", "RS", "SRB", "688"),
    c("Seychelles", "SC", "SYC", "690"),
    c("Sierra Leone", "SL", "SLE", "694"),
    c("Singapore", "SG", "SGP", "702"),
    c("Sint Maarten (Dutch part)", "SX", "SXM", "534"),
    c("Slovakia", "SK", "SVK", "703"),
    c("Slovenia", "SI", "SVN", "705"),
    c("Solomon Islands", "SB", "SLB", "090"),
    c("Somalia", "SO", "SOM", "706"),
    c("South Africa", "ZA", "ZAF", "710"),
    c("South Georgia and the South Sandwich Islands", "GS", "SGS", "239"),
    c("South Sudan", "SS", "SSD", "728"),
    c("Spain", "ES", "ESP", "724"),
    c("Sri Lanka", "LK", "LKA", "144"),
    c("Sudan", "SD", "SDN", "729"),
    c("Suriname", "SR", "SUR", "740"),
    c("Svalbard and Jan Mayen", "SJ", "SJM", "744"),
    c("Sweden", "SE", "SWE", "752"),
    c("Switzerland", "CH", "CHE", "756"),
    c("Syrian Arab Republic", "SY", "SYR", "760"),
    c("Taiwan, Province of China", "TW", "TWN", "158"),
    c("Tajikistan", "TJ", "TJK", "762"),
    c("Tanzania, United Republic of", "TZ", "TZA", "834"),
    c("Thailand", "TH", "THA", "764"),
    c("Timor-Leste", "TL", "TLS", "626"),
    c("Togo", "TG", "TGO", "768"),
    c("Tokelau", "TK", "TKL", "772"),
    c("Tonga", "TO", "TON", "776"),
    c("Trinidad and Tobago", "TT", "TTO", "780"),
    c("Tunisia", "TN", "TUN", "788"),
    c("Türkiye", "TR", "TUR", "792"),
    c("Turkmenistan", "TM", "TKM", "795"),
    c("Turks and Caicos Islands", "TC", "TCA", "796"),
    c("Tuvalu", "TV", "TUV", "798"),
    c("Uganda", "UG", "UGA", "800"),
    c("Ukraine", "UA", "UKR", "804"),
    c("United Arab Emirates", "AE", "ARE", "784"),
    c("United Kingdom of Great Britain and Northern Ireland", "GB", "GBR", "826"),
    c("United States of America", "US", "USA", "840"),
    c("United States Minor Outlying Islands", "UM", "UMI", "581"),
    c("Uruguay", "UY", "URY", "858"),
    c("Uzbekistan", "UZ", "UZB", "860"),
    c("Vanuatu", "VU", "VUT", "548"),
    c("Venezuela, Bolivarian Republic of", "VE", "VEN", "862"),
    c("Viet Nam", "VN", "VNM", "704"),
    c("Virgin Islands, British", "VG", "VGB", "092"),
    c("Virgin Islands, U.S.", "VI", "VIR", "850"),
    c("Wallis and Futuna", "WF", "WLF", "876"),
    c("Western Sahara", "EH", "ESH", "732"),
    c("Yemen", "YE", "YEM", "887"),
    c("Zambia", "ZM", "ZMB", "894"),
    c("Zimbabwe", "ZW", "ZWE", "716"),
];

/// Common short names that differ from the ISO name, keyed by lower-case
/// name and mapped to the alpha-2 code.
static ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "bolivia" => "BO",
    "brunei" => "BN",
    "cape verde" => "CV",
    "czech republic" => "CZ",
    "democratic republic of the congo" => "CD",
    "great britain" => "GB",
    "iran" => "IR",
    "ivory coast" => "CI",
    "laos" => "LA",
    "macedonia" => "MK",
    "micronesia" => "FM",
    "moldova" => "MD",
    "north korea" => "KP",
    "palestine" => "PS",
    "russia" => "RU",
    "south korea" => "KR",
    "korea" => "KR",
    "swaziland" => "SZ",
    "syria" => "SY",
    "taiwan" => "TW",
    "tanzania" => "TZ",
    "turkey" => "TR",
    "uk" => "GB",
    "united kingdom" => "GB",
    "united states" => "US",
    "usa" => "US",
    "vatican" => "VA",
    "venezuela" => "VE",
    "vietnam" => "VN",
};

/// Looks a country up by alpha-2, alpha-3, numeric code, ISO name or
/// common alias. Case-insensitive.
pub fn lookup(key: &str) -> Option<&'static Country> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let lower = key.to_lowercase();

    let by_code = |code: &str| {
        COUNTRIES.iter().find(|country| {
            country.alpha2.eq_ignore_ascii_case(code)
                || country.alpha3.eq_ignore_ascii_case(code)
                || country.numeric == code
        })
    };

    match lower.len() {
        2 | 3 => by_code(&lower),
        _ => None,
    }
    .or_else(|| {
        COUNTRIES
            .iter()
            .find(|country| country.name.to_lowercase() == lower)
    })
    .or_else(|| ALIASES.get(lower.as_str()).and_then(|alpha2| by_code(alpha2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let alpha2: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha2).collect();
        let alpha3: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha3).collect();
        let numeric: HashSet<_> = COUNTRIES.iter().map(|c| c.numeric).collect();
        assert_eq!(alpha2.len(), COUNTRIES.len());
        assert_eq!(alpha3.len(), COUNTRIES.len());
        assert_eq!(numeric.len(), COUNTRIES.len());
    }

    #[test]
    fn test_lookup_by_every_key() {
        assert_eq!(lookup("Italy").unwrap().name, "Italy");
        assert_eq!(lookup("italy").unwrap().name, "Italy");
        assert_eq!(lookup("IT").unwrap().name, "Italy");
        assert_eq!(lookup("ita").unwrap().name, "Italy");
        assert_eq!(lookup("380").unwrap().name, "Italy");
        assert_eq!(lookup(" lebanon ").unwrap().name, "Lebanon");
    }

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(lookup("South Korea").unwrap().alpha2, "KR");
        assert_eq!(lookup("USA").unwrap().name, "United States of America");
        assert_eq!(lookup("Turkey").unwrap().name, "Türkiye");
    }

    #[test]
    fn test_alias_targets_exist() {
        for alpha2 in ALIASES.values() {
            assert!(
                COUNTRIES.iter().any(|c| c.alpha2 == *alpha2),
                "alias target {alpha2} missing"
            );
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("Wrong").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("XX").is_none());
    }
}
