use crate::lang::{ENG, Lang, NameTable};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates every language from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        names: { $($cc:literal => $local:literal),* $(,)? }
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        paste! {
            $(
                static [<$code _NAMES>]: NameTable = phf_map! {
                    $($cc => $local),*
                };
            )*

            /// Language code → name table. Adding a language is a data change.
            pub static LANG_TABLE: Map<&'static str, &'static NameTable> = phf_map! {
                $(
                    $code_str => &[<$code _NAMES>]
                ),*
            };
        }

        /// Every playable language, default first.
        pub fn all_langs() -> &'static [Lang] {
            &[ENG, $($code),*]
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    A missing code falls back to the catalog's default (English) name.
// ---------------------------------------------------------------------------
define_languages! {
    FRA, "fr", "French",
        names: {
            "AD" => "Andorre",
            "AE" => "Émirats arabes unis",
            "AF" => "Afghanistan",
            "AG" => "Antigua-et-Barbuda",
            "AI" => "Anguilla",
            "AL" => "Albanie",
            "AM" => "Arménie",
            "AO" => "Angola",
            "AQ" => "Antarctique",
            "AR" => "Argentine",
            "AS" => "Samoa américaines",
            "AT" => "Autriche",
            "AU" => "Australie",
            "AW" => "Aruba",
            "AX" => "Îles Åland",
            "AZ" => "Azerbaïdjan",
            "BA" => "Bosnie-Herzégovine",
            "BB" => "Barbade",
            "BD" => "Bangladesh",
            "BE" => "Belgique",
            "BF" => "Burkina Faso",
            "BG" => "Bulgarie",
            "BH" => "Bahreïn",
            "BI" => "Burundi",
            "BJ" => "Bénin",
            "BL" => "Saint-Barthélemy",
            "BM" => "Bermudes",
            "BN" => "Brunei",
            "BO" => "Bolivie",
            "BR" => "Brésil",
            "BS" => "Bahamas",
            "BT" => "Bhoutan",
            "BV" => "Île Bouvet",
            "BW" => "Botswana",
            "BY" => "Biélorussie",
            "BZ" => "Belize",
            "CA" => "Canada",
            "CC" => "Îles Cocos",
            "CD" => "République démocratique du Congo",
            "CF" => "République centrafricaine",
            "CG" => "République du Congo",
            "CH" => "Suisse",
            "CI" => "Côte d'Ivoire",
            "CK" => "Îles Cook",
            "CL" => "Chili",
            "CM" => "Cameroun",
            "CN" => "Chine",
            "CO" => "Colombie",
            "CR" => "Costa Rica",
            "CU" => "Cuba",
            "CV" => "Cap-Vert",
            "CW" => "Curaçao",
            "CX" => "Île Christmas",
            "CY" => "Chypre",
            "CZ" => "Tchéquie",
            "DE" => "Allemagne",
            "DJ" => "Djibouti",
            "DK" => "Danemark",
            "DM" => "Dominique",
            "DO" => "République dominicaine",
            "DZ" => "Algérie",
            "EC" => "Équateur",
            "EE" => "Estonie",
            "EG" => "Égypte",
            "EH" => "Sahara occidental",
            "ER" => "Érythrée",
            "ES" => "Espagne",
            "ET" => "Éthiopie",
            "FI" => "Finlande",
            "FJ" => "Fidji",
            "FK" => "Îles Malouines",
            "FM" => "Micronésie",
            "FO" => "Îles Féroé",
            "FR" => "France",
            "GA" => "Gabon",
            "GB" => "Royaume-Uni",
            "GD" => "Grenade",
            "GE" => "Géorgie",
            "GF" => "Guyane",
            "GG" => "Guernesey",
            "GH" => "Ghana",
            "GI" => "Gibraltar",
            "GL" => "Groenland",
            "GM" => "Gambie",
            "GN" => "Guinée",
            "GP" => "Guadeloupe",
            "GQ" => "Guinée équatoriale",
            "GR" => "Grèce",
            "GS" => "Géorgie du Sud-et-les îles Sandwich du Sud",
            "GT" => "Guatemala",
            "GU" => "Guam",
            "GW" => "Guinée-Bissau",
            "GY" => "Guyana",
            "HK" => "Hong Kong",
            "HM" => "Îles Heard-et-MacDonald",
            "HN" => "Honduras",
            "HR" => "Croatie",
            "HT" => "Haïti",
            "HU" => "Hongrie",
            "ID" => "Indonésie",
            "IE" => "Irlande",
            "IL" => "Israël",
            "IM" => "Île de Man",
            "IN" => "Inde",
            "IO" => "Territoire britannique de l'océan Indien",
            "IQ" => "Irak",
            "IR" => "Iran",
            "IS" => "Islande",
            "IT" => "Italie",
            "JE" => "Jersey",
            "JM" => "Jamaïque",
            "JO" => "Jordanie",
            "JP" => "Japon",
            "KE" => "Kenya",
            "KG" => "Kirghizistan",
            "KH" => "Cambodge",
            "KI" => "Kiribati",
            "KM" => "Comores",
            "KN" => "Saint-Christophe-et-Niévès",
            "KP" => "Corée du Nord",
            "KR" => "Corée du Sud",
            "KW" => "Koweït",
            "KY" => "Îles Caïmans",
            "KZ" => "Kazakhstan",
            "LA" => "Laos",
            "LB" => "Liban",
            "LC" => "Sainte-Lucie",
            "LI" => "Liechtenstein",
            "LK" => "Sri Lanka",
            "LR" => "Liberia",
            "LS" => "Lesotho",
            "LT" => "Lituanie",
            "LU" => "Luxembourg",
            "LV" => "Lettonie",
            "LY" => "Libye",
            "MA" => "Maroc",
            "MC" => "Monaco",
            "MD" => "Moldavie",
            "ME" => "Monténégro",
            "MF" => "Saint-Martin",
            "MG" => "Madagascar",
            "MH" => "Îles Marshall",
            "MK" => "Macédoine du Nord",
            "ML" => "Mali",
            "MM" => "Birmanie",
            "MN" => "Mongolie",
            "MO" => "Macao",
            "MP" => "Îles Mariannes du Nord",
            "MQ" => "Martinique",
            "MR" => "Mauritanie",
            "MS" => "Montserrat",
            "MT" => "Malte",
            "MU" => "Maurice",
            "MV" => "Maldives",
            "MW" => "Malawi",
            "MX" => "Mexique",
            "MY" => "Malaisie",
            "MZ" => "Mozambique",
            "NA" => "Namibie",
            "NC" => "Nouvelle-Calédonie",
            "NE" => "Niger",
            "NF" => "Île Norfolk",
            "NG" => "Nigeria",
            "NI" => "Nicaragua",
            "NL" => "Pays-Bas",
            "NO" => "Norvège",
            "NP" => "Népal",
            "NR" => "Nauru",
            "NU" => "Niue",
            "NZ" => "Nouvelle-Zélande",
            "OM" => "Oman",
            "PA" => "Panama",
            "PE" => "Pérou",
            "PF" => "Polynésie française",
            "PG" => "Papouasie-Nouvelle-Guinée",
            "PH" => "Philippines",
            "PK" => "Pakistan",
            "PL" => "Pologne",
            "PM" => "Saint-Pierre-et-Miquelon",
            "PN" => "Îles Pitcairn",
            "PR" => "Porto Rico",
            "PS" => "Palestine",
            "PT" => "Portugal",
            "PW" => "Palaos",
            "PY" => "Paraguay",
            "QA" => "Qatar",
            "RE" => "La Réunion",
            "RO" => "Roumanie",
            "RS" => "Serbie",
            "RU" => "Russie",
            "RW" => "Rwanda",
            "SA" => "Arabie saoudite",
            "SB" => "Îles Salomon",
            "SC" => "Seychelles",
            "SD" => "Soudan",
            "SE" => "Suède",
            "SG" => "Singapour",
            "SH" => "Sainte-Hélène",
            "SI" => "Slovénie",
            "SJ" => "Svalbard et Jan Mayen",
            "SK" => "Slovaquie",
            "SL" => "Sierra Leone",
            "SM" => "Saint-Marin",
            "SN" => "Sénégal",
            "SO" => "Somalie",
            "SR" => "Suriname",
            "SS" => "Soudan du Sud",
            "ST" => "Sao Tomé-et-Principe",
            "SV" => "Salvador",
            "SX" => "Sint Maarten",
            "SY" => "Syrie",
            "SZ" => "Eswatini",
            "TC" => "Îles Turques-et-Caïques",
            "TD" => "Tchad",
            "TF" => "Terres australes et antarctiques françaises",
            "TG" => "Togo",
            "TH" => "Thaïlande",
            "TJ" => "Tadjikistan",
            "TK" => "Tokelau",
            "TL" => "Timor oriental",
            "TM" => "Turkménistan",
            "TN" => "Tunisie",
            "TO" => "Tonga",
            "TR" => "Turquie",
            "TT" => "Trinité-et-Tobago",
            "TV" => "Tuvalu",
            "TW" => "Taïwan",
            "TZ" => "Tanzanie",
            "UA" => "Ukraine",
            "UG" => "Ouganda",
            "US" => "États-Unis",
            "UY" => "Uruguay",
            "UZ" => "Ouzbékistan",
            "VA" => "Vatican",
            "VC" => "Saint-Vincent-et-les-Grenadines",
            "VE" => "Venezuela",
            "VG" => "Îles Vierges britanniques",
            "VI" => "Îles Vierges des États-Unis",
            "VN" => "Viêt Nam",
            "VU" => "Vanuatu",
            "WF" => "Wallis-et-Futuna",
            "WS" => "Samoa",
            "XK" => "Kosovo",
            "YE" => "Yémen",
            "YT" => "Mayotte",
            "ZA" => "Afrique du Sud",
            "ZM" => "Zambie",
            "ZW" => "Zimbabwe",
        },

    HUN, "hu", "Hungarian",
        names: {
            "AD" => "Andorra",
            "AE" => "Egyesült Arab Emírségek",
            "AF" => "Afganisztán",
            "AG" => "Antigua és Barbuda",
            "AI" => "Anguilla",
            "AL" => "Albánia",
            "AM" => "Örményország",
            "AO" => "Angola",
            "AQ" => "Antarktisz",
            "AR" => "Argentína",
            "AS" => "Amerikai Szamoa",
            "AT" => "Ausztria",
            "AU" => "Ausztrália",
            "AW" => "Aruba",
            "AZ" => "Azerbajdzsán",
            "BA" => "Bosznia-Hercegovina",
            "BB" => "Barbados",
            "BD" => "Banglades",
            "BE" => "Belgium",
            "BF" => "Burkina Faso",
            "BG" => "Bulgária",
            "BH" => "Bahrein",
            "BI" => "Burundi",
            "BJ" => "Benin",
            "BM" => "Bermuda",
            "BN" => "Brunei",
            "BO" => "Bolívia",
            "BR" => "Brazília",
            "BS" => "Bahama-szigetek",
            "BT" => "Bhután",
            "BV" => "Bouvet-sziget",
            "BW" => "Botswana",
            "BY" => "Fehéroroszország",
            "BZ" => "Belize",
            "CA" => "Kanada",
            "CC" => "Kókusz (Keeling)-szigetek",
            "CD" => "Kongói Demokratikus Köztársaság",
            "CF" => "Közép-afrikai Köztársaság",
            "CG" => "Kongói Köztársaság",
            "CH" => "Svájc",
            "CI" => "Elefántcsontpart",
            "CK" => "Cook-szigetek",
            "CL" => "Chile",
            "CM" => "Kamerun",
            "CN" => "Kína",
            "CO" => "Kolumbia",
            "CR" => "Costa Rica",
            "CU" => "Kuba",
            "CV" => "Zöld-foki Köztársaság",
            "CW" => "Curaçao",
            "CX" => "Karácsony-sziget",
            "CY" => "Ciprus",
            "CZ" => "Csehország",
            "DE" => "Németország",
            "DJ" => "Dzsibuti",
            "DK" => "Dánia",
            "DM" => "Dominikai Közösség",
            "DO" => "Dominikai Köztársaság",
            "DZ" => "Algéria",
            "EC" => "Ecuador",
            "EE" => "Észtország",
            "EG" => "Egyiptom",
            "EH" => "Nyugat-Szahara",
            "ER" => "Eritrea",
            "ES" => "Spanyolország",
            "ET" => "Etiópia",
            "FI" => "Finnország",
            "FJ" => "Fidzsi-szigetek",
            "FK" => "Falkland-szigetek",
            "FM" => "Mikronézia",
            "FO" => "Feröer",
            "FR" => "Franciaország",
            "GA" => "Gabon",
            "GB" => "Egyesült Királyság",
            "GD" => "Grenada",
            "GE" => "Grúzia",
            "GF" => "Francia Guyana",
            "GG" => "Guernsey",
            "GH" => "Ghána",
            "GI" => "Gibraltár",
            "GL" => "Grönland",
            "GM" => "Gambia",
            "GN" => "Guinea",
            "GP" => "Guadeloupe",
            "GQ" => "Egyenlítői-Guinea",
            "GR" => "Görögország",
            "GS" => "Déli-Georgia és Déli-Sandwich-szigetek",
            "GT" => "Guatemala",
            "GU" => "Guam",
            "GW" => "Bissau-Guinea",
            "GY" => "Guyana",
            "HK" => "Hongkong",
            "HM" => "Heard-sziget és McDonald-szigetek",
            "HN" => "Honduras",
            "HR" => "Horvátország",
            "HT" => "Haiti",
            "HU" => "Magyarország",
            "ID" => "Indonézia",
            "IE" => "Írország",
            "IL" => "Izrael",
            "IM" => "Man-sziget",
            "IN" => "India",
            "IO" => "Brit Indiai-óceáni Terület",
            "IQ" => "Irak",
            "IR" => "Irán",
            "IS" => "Izland",
            "IT" => "Olaszország",
            "JE" => "Jersey",
            "JM" => "Jamaica",
            "JO" => "Jordánia",
            "JP" => "Japán",
            "KE" => "Kenya",
            "KG" => "Kirgizisztán",
            "KH" => "Kambodzsa",
            "KI" => "Kiribati",
            "KM" => "Comore-szigetek",
            "KN" => "Saint Kitts és Nevis",
            "KP" => "Észak-Korea",
            "KR" => "Dél-Korea",
            "KW" => "Kuvait",
            "KY" => "Kajmán-szigetek",
            "KZ" => "Kazahsztán",
            "LA" => "Laosz",
            "LB" => "Libanon",
            "LC" => "Saint Lucia",
            "LI" => "Liechtenstein",
            "LK" => "Srí Lanka",
            "LR" => "Libéria",
            "LS" => "Lesotho",
            "LT" => "Litvánia",
            "LU" => "Luxemburg",
            "LV" => "Lettország",
            "LY" => "Líbia",
            "MA" => "Marokkó",
            "MC" => "Monaco",
            "MD" => "Moldova",
            "ME" => "Montenegró",
            "MG" => "Madagaszkár",
            "MH" => "Marshall-szigetek",
            "MK" => "Észak-Macedónia",
            "ML" => "Mali",
            "MM" => "Mianmar",
            "MN" => "Mongólia",
            "MO" => "Makaó",
            "MP" => "Északi-Mariana-szigetek",
            "MQ" => "Martinique",
            "MR" => "Mauritánia",
            "MS" => "Montserrat",
            "MT" => "Málta",
            "MU" => "Mauritius",
            "MV" => "Maldív-szigetek",
            "MW" => "Malawi",
            "MX" => "Mexikó",
            "MY" => "Malajzia",
            "MZ" => "Mozambik",
            "NA" => "Namíbia",
            "NC" => "Új-Kaledónia",
            "NE" => "Niger",
            "NF" => "Norfolk-sziget",
            "NG" => "Nigéria",
            "NI" => "Nicaragua",
            "NL" => "Hollandia",
            "NO" => "Norvégia",
            "NP" => "Nepál",
            "NR" => "Nauru",
            "NU" => "Niue",
            "NZ" => "Új-Zéland",
            "OM" => "Omán",
            "PA" => "Panama",
            "PE" => "Peru",
            "PF" => "Francia Polinézia",
            "PG" => "Pápua Új-Guinea",
            "PH" => "Fülöp-szigetek",
            "PK" => "Pakisztán",
            "PL" => "Lengyelország",
            "PM" => "Saint-Pierre és Miquelon",
            "PN" => "Pitcairn-szigetek",
            "PR" => "Puerto Rico",
            "PS" => "Palesztina",
            "PT" => "Portugália",
            "PW" => "Palau",
            "PY" => "Paraguay",
            "QA" => "Katar",
            "RE" => "Réunion",
            "RO" => "Románia",
            "RS" => "Szerbia",
            "RU" => "Oroszország",
            "RW" => "Ruanda",
            "SA" => "Szaúd-Arábia",
            "SB" => "Salamon-szigetek",
            "SC" => "Seychelle-szigetek",
            "SD" => "Szudán",
            "SE" => "Svédország",
            "SG" => "Szingapúr",
            "SH" => "Szent Ilona",
            "SI" => "Szlovénia",
            "SJ" => "Svalbard és Jan Mayen",
            "SK" => "Szlovákia",
            "SL" => "Sierra Leone",
            "SM" => "San Marino",
            "SN" => "Szenegál",
            "SO" => "Szomália",
            "SR" => "Suriname",
            "SS" => "Dél-Szudán",
            "ST" => "São Tomé és Príncipe",
            "SV" => "Salvador",
            "SY" => "Szíria",
            "SZ" => "Szváziföld",
            "TC" => "Turks- és Caicos-szigetek",
            "TD" => "Csád",
            "TF" => "Francia déli és antarktiszi területek",
            "TG" => "Togo",
            "TH" => "Thaiföld",
            "TJ" => "Tádzsikisztán",
            "TK" => "Tokelau",
            "TL" => "Kelet-Timor",
            "TM" => "Türkmenisztán",
            "TN" => "Tunézia",
            "TO" => "Tonga",
            "TR" => "Törökország",
            "TT" => "Trinidad és Tobago",
            "TV" => "Tuvalu",
            "TW" => "Tajvan",
            "TZ" => "Tanzánia",
            "UA" => "Ukrajna",
            "UG" => "Uganda",
            "US" => "Egyesült Államok",
            "UY" => "Uruguay",
            "UZ" => "Üzbegisztán",
            "VA" => "Vatikán",
            "VC" => "Saint Vincent és a Grenadine-szigetek",
            "VE" => "Venezuela",
            "VG" => "Brit Virgin-szigetek",
            "VI" => "Amerikai Virgin-szigetek",
            "VN" => "Vietnám",
            "VU" => "Vanuatu",
            "WF" => "Wallis és Futuna",
            "WS" => "Szamoa",
            "XK" => "Koszovó",
            "YE" => "Jemen",
            "YT" => "Mayotte",
            "ZA" => "Dél-afrikai Köztársaság",
            "ZM" => "Zambia",
            "ZW" => "Zimbabwe",
        },

    NLD, "nl", "Dutch",
        names: {
            "AD" => "Andorra",
            "AE" => "Verenigde Arabische Emiraten",
            "AF" => "Afghanistan",
            "AG" => "Antigua en Barbuda",
            "AI" => "Anguilla",
            "AL" => "Albanië",
            "AM" => "Armenië",
            "AO" => "Angola",
            "AQ" => "Antarctica",
            "AR" => "Argentinië",
            "AS" => "Amerikaans-Samoa",
            "AT" => "Oostenrijk",
            "AU" => "Australië",
            "AW" => "Aruba",
            "AX" => "Åland",
            "AZ" => "Azerbeidzjan",
            "BA" => "Bosnië en Herzegovina",
            "BB" => "Barbados",
            "BD" => "Bangladesh",
            "BE" => "België",
            "BF" => "Burkina Faso",
            "BG" => "Bulgarije",
            "BH" => "Bahrein",
            "BI" => "Burundi",
            "BJ" => "Benin",
            "BL" => "Saint-Barthélemy",
            "BM" => "Bermuda",
            "BN" => "Brunei",
            "BO" => "Bolivia",
            "BR" => "Brazilië",
            "BS" => "Bahama's",
            "BT" => "Bhutan",
            "BV" => "Bouveteiland",
            "BW" => "Botswana",
            "BY" => "Belarus",
            "BZ" => "Belize",
            "CA" => "Canada",
            "CC" => "Cocoseilanden",
            "CD" => "Congo-Kinshasa",
            "CF" => "Centraal-Afrikaanse Republiek",
            "CG" => "Congo-Brazzaville",
            "CH" => "Zwitserland",
            "CI" => "Ivoorkust",
            "CK" => "Cookeilanden",
            "CL" => "Chili",
            "CM" => "Kameroen",
            "CN" => "China",
            "CO" => "Colombia",
            "CR" => "Costa Rica",
            "CU" => "Cuba",
            "CV" => "Kaapverdië",
            "CW" => "Curaçao",
            "CX" => "Christmaseiland",
            "CY" => "Cyprus",
            "CZ" => "Tsjechië",
            "DE" => "Duitsland",
            "DJ" => "Djibouti",
            "DK" => "Denemarken",
            "DM" => "Dominica",
            "DO" => "Dominicaanse Republiek",
            "DZ" => "Algerije",
            "EC" => "Ecuador",
            "EE" => "Estland",
            "EG" => "Egypte",
            "EH" => "Westelijke Sahara",
            "ER" => "Eritrea",
            "ES" => "Spanje",
            "ET" => "Ethiopië",
            "FI" => "Finland",
            "FJ" => "Fiji",
            "FK" => "Falklandeilanden",
            "FM" => "Micronesia",
            "FO" => "Faeröer",
            "FR" => "Frankrijk",
            "GA" => "Gabon",
            "GB" => "Verenigd Koninkrijk",
            "GD" => "Grenada",
            "GE" => "Georgië",
            "GF" => "Frans-Guyana",
            "GG" => "Guernsey",
            "GH" => "Ghana",
            "GI" => "Gibraltar",
            "GL" => "Groenland",
            "GM" => "Gambia",
            "GN" => "Guinee",
            "GP" => "Guadeloupe",
            "GQ" => "Equatoriaal-Guinea",
            "GR" => "Griekenland",
            "GS" => "Zuid-Georgia en de Zuidelijke Sandwicheilanden",
            "GT" => "Guatemala",
            "GU" => "Guam",
            "GW" => "Guinee-Bissau",
            "GY" => "Guyana",
            "HK" => "Hongkong",
            "HM" => "Heard en McDonaldeilanden",
            "HN" => "Honduras",
            "HR" => "Kroatië",
            "HT" => "Haïti",
            "HU" => "Hongarije",
            "ID" => "Indonesië",
            "IE" => "Ierland",
            "IL" => "Israël",
            "IM" => "Man",
            "IN" => "India",
            "IO" => "Brits Indische Oceaanterritorium",
            "IQ" => "Irak",
            "IR" => "Iran",
            "IS" => "IJsland",
            "IT" => "Italië",
            "JE" => "Jersey",
            "JM" => "Jamaica",
            "JO" => "Jordanië",
            "JP" => "Japan",
            "KE" => "Kenia",
            "KG" => "Kirgizië",
            "KH" => "Cambodja",
            "KI" => "Kiribati",
            "KM" => "Comoren",
            "KN" => "Saint Kitts en Nevis",
            "KP" => "Noord-Korea",
            "KR" => "Zuid-Korea",
            "KW" => "Koeweit",
            "KY" => "Kaaimaneilanden",
            "KZ" => "Kazachstan",
            "LA" => "Laos",
            "LB" => "Libanon",
            "LC" => "Saint Lucia",
            "LI" => "Liechtenstein",
            "LK" => "Sri Lanka",
            "LR" => "Liberia",
            "LS" => "Lesotho",
            "LT" => "Litouwen",
            "LU" => "Luxemburg",
            "LV" => "Letland",
            "LY" => "Libië",
            "MA" => "Marokko",
            "MC" => "Monaco",
            "MD" => "Moldavië",
            "ME" => "Montenegro",
            "MF" => "Saint-Martin",
            "MG" => "Madagaskar",
            "MH" => "Marshalleilanden",
            "MK" => "Noord-Macedonië",
            "ML" => "Mali",
            "MM" => "Myanmar",
            "MN" => "Mongolië",
            "MO" => "Macau",
            "MP" => "Noordelijke Marianen",
            "MQ" => "Martinique",
            "MR" => "Mauritanië",
            "MS" => "Montserrat",
            "MT" => "Malta",
            "MU" => "Mauritius",
            "MV" => "Maldiven",
            "MW" => "Malawi",
            "MX" => "Mexico",
            "MY" => "Maleisië",
            "MZ" => "Mozambique",
            "NA" => "Namibië",
            "NC" => "Nieuw-Caledonië",
            "NE" => "Niger",
            "NF" => "Norfolk",
            "NG" => "Nigeria",
            "NI" => "Nicaragua",
            "NL" => "Nederland",
            "NO" => "Noorwegen",
            "NP" => "Nepal",
            "NR" => "Nauru",
            "NU" => "Niue",
            "NZ" => "Nieuw-Zeeland",
            "OM" => "Oman",
            "PA" => "Panama",
            "PE" => "Peru",
            "PF" => "Frans-Polynesië",
            "PG" => "Papoea-Nieuw-Guinea",
            "PH" => "Filipijnen",
            "PK" => "Pakistan",
            "PL" => "Polen",
            "PM" => "Saint-Pierre en Miquelon",
            "PN" => "Pitcairneilanden",
            "PR" => "Puerto Rico",
            "PS" => "Palestina",
            "PT" => "Portugal",
            "PW" => "Palau",
            "PY" => "Paraguay",
            "QA" => "Qatar",
            "RE" => "Réunion",
            "RO" => "Roemenië",
            "RS" => "Servië",
            "RU" => "Rusland",
            "RW" => "Rwanda",
            "SA" => "Saoedi-Arabië",
            "SB" => "Salomonseilanden",
            "SC" => "Seychellen",
            "SD" => "Soedan",
            "SE" => "Zweden",
            "SG" => "Singapore",
            "SH" => "Sint-Helena",
            "SI" => "Slovenië",
            "SJ" => "Spitsbergen en Jan Mayen",
            "SK" => "Slowakije",
            "SL" => "Sierra Leone",
            "SM" => "San Marino",
            "SN" => "Senegal",
            "SO" => "Somalië",
            "SR" => "Suriname",
            "SS" => "Zuid-Soedan",
            "ST" => "Sao Tomé en Principe",
            "SV" => "El Salvador",
            "SX" => "Sint Maarten",
            "SY" => "Syrië",
            "SZ" => "Eswatini",
            "TC" => "Turks- en Caicoseilanden",
            "TD" => "Tsjaad",
            "TF" => "Franse Zuidelijke en Antarctische Gebieden",
            "TG" => "Togo",
            "TH" => "Thailand",
            "TJ" => "Tadzjikistan",
            "TK" => "Tokelau",
            "TL" => "Oost-Timor",
            "TM" => "Turkmenistan",
            "TN" => "Tunesië",
            "TO" => "Tonga",
            "TR" => "Turkije",
            "TT" => "Trinidad en Tobago",
            "TV" => "Tuvalu",
            "TW" => "Taiwan",
            "TZ" => "Tanzania",
            "UA" => "Oekraïne",
            "UG" => "Oeganda",
            "US" => "Verenigde Staten",
            "UY" => "Uruguay",
            "UZ" => "Oezbekistan",
            "VA" => "Vaticaanstad",
            "VC" => "Saint Vincent en de Grenadines",
            "VE" => "Venezuela",
            "VG" => "Britse Maagdeneilanden",
            "VI" => "Amerikaanse Maagdeneilanden",
            "VN" => "Vietnam",
            "VU" => "Vanuatu",
            "WF" => "Wallis en Futuna",
            "WS" => "Samoa",
            "XK" => "Kosovo",
            "YE" => "Jemen",
            "YT" => "Mayotte",
            "ZA" => "Zuid-Afrika",
            "ZM" => "Zambia",
            "ZW" => "Zimbabwe",
        },
}
