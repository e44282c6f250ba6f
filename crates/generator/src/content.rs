//! Static bilingual marketing content shared by the page components and the
//! structured-data builders.

use roadtrip_ssg_core::LocaleContext;

/// A German/English text pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bi {
    pub de: &'static str,
    pub en: &'static str,
}

impl Bi {
    pub const fn new(de: &'static str, en: &'static str) -> Self {
        Self { de, en }
    }

    pub const fn same(text: &'static str) -> Self {
        Self { de: text, en: text }
    }

    pub fn get(&self, ctx: &LocaleContext) -> &'static str {
        ctx.t(self.de, self.en)
    }
}

pub struct Stat {
    pub label: Bi,
    pub value: &'static str,
    /// Bar fill, percent.
    pub fill: u8,
}

pub struct Vehicle {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub kind_label: Bi,
    pub tier_class: &'static str,
    pub tier_label: Bi,
    pub daily_price: u32,
    pub image: &'static str,
    pub stats: &'static [Stat],
    pub quick_specs: &'static [Bi],
    pub equipment: &'static [Bi],
}

pub const SUPERCHARGING_INCLUDED: Bi =
    Bi::new("Tesla Supercharging inklusive", "Tesla Supercharging included");

pub static VEHICLES: &[Vehicle] = &[
    Vehicle {
        id: "model_y_camping",
        name: "Model Y Camping-Paket",
        kind: "adventure",
        kind_label: Bi::new("Abenteuer", "Adventure"),
        tier_class: "tier-gold",
        tier_label: Bi::new("Beliebt", "Popular"),
        daily_price: 216,
        image: "teslamodely_flipcard.jpg",
        stats: &[
            Stat { label: Bi::new("Reichweite", "Range"), value: "225 mi", fill: 56 },
            Stat { label: Bi::same("0-60"), value: "6.8s", fill: 53 },
            Stat { label: Bi::new("Laden", "Charging"), value: "250kW", fill: 70 },
            Stat { label: Bi::new("Stauraum", "Storage"), value: "68 cu ft", fill: 85 },
        ],
        quick_specs: &[
            Bi::new("5 Sitze", "5 Seats"),
            Bi::same("RWD"),
            Bi::new("Camp-Modus", "Camp Mode"),
        ],
        equipment: &[
            Bi::new("Dachzelt (2P)", "Rooftop Tent (2P)"),
            Bi::new("Schlafmatte", "Sleep Mat"),
            Bi::new("Kühlbox", "Cooler"),
            Bi::new("Kochset", "Kitchen Set"),
            Bi::new("Stühle x2", "Chairs x2"),
            Bi::new("Laterne", "Lantern"),
        ],
    },
    Vehicle {
        id: "cybertruck",
        name: "Cybertruck Off-Grid",
        kind: "offroad",
        kind_label: Bi::new("Offroad", "Off-Road"),
        tier_class: "tier-platinum",
        tier_label: Bi::same("Premium"),
        daily_price: 299,
        image: "cybertruck_flipcard.jpg",
        stats: &[
            Stat { label: Bi::new("Reichweite", "Range"), value: "340 mi", fill: 68 },
            Stat { label: Bi::same("0-60"), value: "2.6s", fill: 90 },
            Stat { label: Bi::new("Laden", "Charging"), value: "350kW", fill: 85 },
            Stat { label: Bi::new("Stauraum", "Storage"), value: "121 cu ft", fill: 95 },
        ],
        quick_specs: &[
            Bi::new("6 Sitze", "6 Seats"),
            Bi::same("Tri-Motor"),
            Bi::same("V2H Power"),
        ],
        equipment: &[
            Bi::new("Dachzelt (4P)", "Rooftop Tent (4P)"),
            Bi::new("Matratze", "Mattress"),
            Bi::same("Starlink"),
            Bi::same("Solar"),
            Bi::new("Kochset Pro", "Kitchen Pro"),
            Bi::new("Stühle x4", "Chairs x4"),
        ],
    },
    Vehicle {
        id: "model_y_budget",
        name: "Model Y Budget",
        kind: "classic",
        kind_label: Bi::new("Klassisch", "Classic"),
        tier_class: "tier-silver",
        tier_label: Bi::same("Budget"),
        daily_price: 119,
        image: "redteslasandiego.jpg",
        stats: &[
            Stat { label: Bi::new("Reichweite", "Range"), value: "225 mi", fill: 56 },
            Stat { label: Bi::same("0-60"), value: "6.8s", fill: 53 },
            Stat { label: Bi::new("Laden", "Charging"), value: "250kW", fill: 70 },
            Stat { label: Bi::new("Stauraum", "Storage"), value: "36 cu ft", fill: 50 },
        ],
        quick_specs: &[
            Bi::new("5 Sitze", "5 Seats"),
            Bi::same("RWD"),
            Bi::new("Bodenzelt", "Ground Tent"),
        ],
        equipment: &[
            Bi::new("Bodenzelt (2P)", "Ground Tent (2P)"),
            Bi::new("Isomatte", "Sleep Pad"),
            Bi::new("Kühlbox", "Cooler"),
            Bi::new("Kochset", "Kitchen Set"),
            Bi::new("Stühle x2", "Chairs x2"),
            Bi::new("Laterne", "Lantern"),
        ],
    },
];

/// Fleet comparison: label, then budget / comfort / off-grid columns.
pub static COMPARISON: &[(Bi, [&str; 3])] = &[
    (Bi::new("Fahrzeug", "Vehicle"), ["Model Y (RWD)", "Model Y (RWD)", "Cybertruck (Tri-Motor)"]),
    (Bi::new("Preis ab", "From"), ["$119", "$216", "$299"]),
    (Bi::new("Reichweite", "Range"), ["330 mi", "225 mi*", "340 mi"]),
    (Bi::same("0-60 mph"), ["4.8s", "6.8s", "2.6s"]),
    (Bi::new("Laden", "Charging"), ["250 kW", "250 kW", "350 kW"]),
    (Bi::new("Stauraum", "Storage"), ["68 cu ft", "68 cu ft", "121 cu ft"]),
    (Bi::new("Sitze", "Seats"), ["5", "5", "6"]),
    (Bi::same("Starlink"), ["\u{2014}", "\u{2014}", "\u{2713}"]),
    (Bi::same("Solar"), ["\u{2014}", "\u{2014}", "\u{2713}"]),
    (Bi::new("V2H Strom", "V2H Power"), ["\u{2014}", "\u{2014}", "\u{2713}"]),
];

pub struct PricingTier {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: Bi,
    pub daily_price: u32,
    pub tier_class: &'static str,
    pub tier_label: Bi,
    pub included: &'static [Bi],
    pub extras: &'static [Bi],
}

pub static PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        id: "budget",
        name: "Model Y Budget",
        tagline: Bi::new("Perfekt für Sparfuchs-Abenteurer", "Perfect for budget adventurers"),
        daily_price: 119,
        tier_class: "tier-silver",
        tier_label: Bi::same("Budget"),
        included: &[
            Bi::same("Tesla Model Y (RWD)"),
            Bi::new("4P Bodenzelt", "4P Ground Tent"),
            Bi::new("Schlafsäcke", "Sleeping Bags"),
            Bi::new("Campingkocher", "Camp Stove"),
            Bi::new("Kühlbox 30L", "Cooler 30L"),
            Bi::same("Tesla Supercharging"),
            Bi::new("Versicherung inkl.", "Insurance Incl."),
            Bi::same("24/7 Concierge"),
        ],
        extras: &[
            Bi::new("Campingstühle", "Camp Chairs"),
            Bi::new("Erste-Hilfe-Set", "First Aid Kit"),
        ],
    },
    PricingTier {
        id: "comfort",
        name: "Model Y Camping-Paket",
        tagline: Bi::new(
            "Unser Bestseller: Komfort trifft Abenteuer",
            "Our bestseller: comfort meets adventure",
        ),
        daily_price: 216,
        tier_class: "tier-gold",
        tier_label: Bi::new("Beliebt", "Popular"),
        included: &[
            Bi::same("Tesla Model Y (RWD)"),
            Bi::new("Thule Dachzelt (2P)", "Thule Rooftop Tent (2P)"),
            Bi::same("Exped MegaMat Duo"),
            Bi::new("Yeti Tundra 45 Kühlbox", "Yeti Tundra 45 Cooler"),
            Bi::new("Camp Küchen-Set", "Camp Kitchen Set"),
            Bi::same("Tesla Supercharging"),
            Bi::new("Versicherung inkl.", "Insurance Incl."),
            Bi::same("24/7 Concierge"),
            Bi::new("KI-Routenplaner App", "AI Route Planner App"),
        ],
        extras: &[
            Bi::new("Campingstühle x2", "Camp Chairs x2"),
            Bi::new("LED Laterne", "LED Lantern"),
        ],
    },
    PricingTier {
        id: "offgrid",
        name: "Cybertruck Off-Grid",
        tagline: Bi::new(
            "Maximale Freiheit für ernsthafte Entdecker",
            "Maximum freedom for serious explorers",
        ),
        daily_price: 299,
        tier_class: "tier-platinum",
        tier_label: Bi::same("Premium"),
        included: &[
            Bi::same("Tesla Cybertruck (Tri-Motor)"),
            Bi::new("iKamper Dachzelt (4P)", "iKamper Rooftop Tent (4P)"),
            Bi::same("Starlink Internet"),
            Bi::new("Solar-Panel", "Solar Panel"),
            Bi::new("Jackery 1500 Powerstation", "Jackery 1500 Power Station"),
            Bi::new("Dometic Kühlschrank 55L", "Dometic Fridge 55L"),
            Bi::same("Tesla Supercharging"),
            Bi::new("Versicherung inkl.", "Insurance Incl."),
            Bi::same("24/7 Concierge"),
            Bi::new("KI-Routenplaner App", "AI Route Planner App"),
            Bi::new("V2H Stromversorgung", "V2H Power Supply"),
        ],
        extras: &[
            Bi::new("Bergungs-Kit", "Recovery Kit"),
            Bi::new("Campingstühle x4", "Camp Chairs x4"),
        ],
    },
];

pub static FEES: &[Bi] = &[
    Bi::new(
        "$139 einmalige Servicegebühr (Fahrzeugvorbereitung, Ausrüstung, Reinigung, App)",
        "$139 one-time service fee (vehicle prep, equipment, cleaning, app)",
    ),
    Bi::new("$250 Kaution (wird erstattet)", "$250 refundable deposit"),
    Bi::new("Reinigung $50-150 bei Bedarf", "Cleaning $50-150 if needed"),
    Bi::new("Maut & Parkgebühren trägt der Kunde", "Tolls & parking paid by customer"),
];

pub struct TripStop {
    pub day: Bi,
    pub leg: Bi,
    pub distance: Option<&'static str>,
    pub charger: Option<Bi>,
}

pub struct Kml {
    pub file: &'static str,
    pub label: Bi,
}

pub struct Trip {
    pub id: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub meta: Bi,
    pub summary: Bi,
    pub stops: &'static [TripStop],
    pub kml: &'static [Kml],
}

pub static TRIPS: &[Trip] = &[
    Trip {
        id: "grand-circle",
        title: "Grand Circle Adventure",
        image: "zion-campsite-tesla.jpg",
        meta: Bi::new("7 Tage \u{2022} Utah & Arizona", "7 Days \u{2022} Utah & Arizona"),
        summary: Bi::new(
            "Von Las Vegas zum Grand Canyon und zurück über Zion und Bryce: drei der spektakulärsten Nationalparks Amerikas.",
            "From Las Vegas to the Grand Canyon and back via Zion and Bryce: three of America's most spectacular national parks.",
        ),
        stops: &[
            TripStop {
                day: Bi::new("Tag 1", "Day 1"),
                leg: Bi::same("Las Vegas \u{2192} Grand Canyon"),
                distance: Some("280 mi"),
                charger: Some(Bi::same("Supercharger: Kingman, AZ")),
            },
            TripStop {
                day: Bi::new("Tag 2-3", "Day 2-3"),
                leg: Bi::new(
                    "Grand Canyon: South Rim, Wanderungen & Sonnenuntergänge",
                    "Grand Canyon: South Rim, Hikes & Sunsets",
                ),
                distance: None,
                charger: None,
            },
            TripStop {
                day: Bi::new("Tag 4", "Day 4"),
                leg: Bi::same("Grand Canyon \u{2192} Zion National Park"),
                distance: Some("250 mi"),
                charger: Some(Bi::same("Supercharger: St. George, UT")),
            },
            TripStop {
                day: Bi::new("Tag 6", "Day 6"),
                leg: Bi::same("Zion \u{2192} Escalante/Bryce Canyon"),
                distance: Some("150 mi"),
                charger: Some(Bi::same("Destination Charger: Escalante RV Park")),
            },
            TripStop {
                day: Bi::new("Tag 7", "Day 7"),
                leg: Bi::same("Escalante \u{2192} Las Vegas"),
                distance: Some("290 mi"),
                charger: Some(Bi::same("Supercharger: St. George, UT")),
            },
        ],
        kml: &[Kml {
            file: "Las_Vegas_Tour_-_7_Tage.kml",
            label: Bi::new(
                "Route für Google Earth herunterladen",
                "Download Route for Google Earth",
            ),
        }],
    },
    Trip {
        id: "route-66",
        title: "Route 66 Revival",
        image: "14-days-sunsets-skyline.jpg",
        meta: Bi::new("14 Tage \u{2022} Cross-Country", "14 Days \u{2022} Cross-Country"),
        summary: Bi::new(
            "Die legendäre Mother Road von Chicago nach Santa Monica: 3.940 km amerikanische Geschichte.",
            "The legendary Mother Road from Chicago to Santa Monica: 2,400 miles of American history.",
        ),
        stops: &[
            TripStop {
                day: Bi::new("Tag 1-2", "Day 1-2"),
                leg: Bi::same("Chicago \u{2192} St. Louis"),
                distance: Some("297 mi"),
                charger: Some(Bi::same("Supercharger: Springfield, IL")),
            },
            TripStop {
                day: Bi::new("Tag 5-6", "Day 5-6"),
                leg: Bi::same("Oklahoma City \u{2192} Amarillo"),
                distance: Some("259 mi"),
                charger: Some(Bi::same("Supercharger: Elk City, OK")),
            },
            TripStop {
                day: Bi::new("Tag 7-9", "Day 7-9"),
                leg: Bi::same("Cadillac Ranch, Santa Fe & Albuquerque"),
                distance: None,
                charger: None,
            },
            TripStop {
                day: Bi::new("Tag 10-14", "Day 10-14"),
                leg: Bi::same("Flagstaff \u{2192} Grand Canyon \u{2192} Las Vegas \u{2192} Santa Monica"),
                distance: Some("580 mi"),
                charger: Some(Bi::same("Supercharger: Kingman, Barstow")),
            },
        ],
        kml: &[
            Kml {
                file: "Route_66_-_Part_1.kml",
                label: Bi::new(
                    "Route Teil 1 (Chicago \u{2192} Oklahoma)",
                    "Route Part 1 (Chicago \u{2192} Oklahoma)",
                ),
            },
            Kml {
                file: "Copy_of_Route_66_-_Part_2.kml",
                label: Bi::new(
                    "Route Teil 2 (Oklahoma \u{2192} LA)",
                    "Route Part 2 (Oklahoma \u{2192} LA)",
                ),
            },
        ],
    },
    Trip {
        id: "rocky-mountain",
        title: "Rocky Mountain Route",
        image: "yellowstone.jpg",
        meta: Bi::new("7 Tage \u{2022} Rocky Mountains", "7 Days \u{2022} Rocky Mountains"),
        summary: Bi::new(
            "Von Denver bis Yellowstone: Bisons, Old Faithful und der klarste Sternenhimmel Amerikas.",
            "From Denver to Yellowstone: bison, Old Faithful and America's clearest starry skies.",
        ),
        stops: &[
            TripStop {
                day: Bi::new("Tag 1", "Day 1"),
                leg: Bi::same("Denver \u{2192} Estes Park"),
                distance: Some("71 mi"),
                charger: Some(Bi::same("Supercharger: Longmont, CO")),
            },
            TripStop {
                day: Bi::new("Tag 3-4", "Day 3-4"),
                leg: Bi::same("Grand Teton National Park"),
                distance: Some("450 mi"),
                charger: Some(Bi::same("Supercharger: Laramie, Rock Springs")),
            },
            TripStop {
                day: Bi::new("Tag 5-6", "Day 5-6"),
                leg: Bi::same("Yellowstone: Old Faithful, Grand Prismatic, Mammoth Hot Springs"),
                distance: None,
                charger: Some(Bi::new(
                    "9 kostenlose Level-2-Ladestationen im Park",
                    "9 free Level 2 chargers inside the park",
                )),
            },
        ],
        kml: &[],
    },
    Trip {
        id: "pacific-coast",
        title: "Pacific Coast Highway",
        image: "pacificcoasthighway.jpg",
        meta: Bi::new("10 Tage \u{2022} Kalifornien", "10 Days \u{2022} California"),
        summary: Bi::new(
            "Von Los Angeles nach San Francisco entlang dramatischer Klippen und durch neblige Redwood-Wälder.",
            "From Los Angeles to San Francisco along dramatic cliffs and through misty redwood forests.",
        ),
        stops: &[
            TripStop {
                day: Bi::new("Tag 1-2", "Day 1-2"),
                leg: Bi::same("Los Angeles \u{2192} Santa Barbara"),
                distance: Some("95 mi"),
                charger: Some(Bi::same("Supercharger: Santa Barbara")),
            },
            TripStop {
                day: Bi::new("Tag 5-7", "Day 5-7"),
                leg: Bi::same("Big Sur Coastline & Pfeiffer Beach"),
                distance: Some("90 mi"),
                charger: Some(Bi::same("Supercharger: Monterey")),
            },
            TripStop {
                day: Bi::new("Tag 10", "Day 10"),
                leg: Bi::same("Santa Cruz \u{2192} San Francisco"),
                distance: Some("75 mi"),
                charger: Some(Bi::same("Supercharger: Daly City")),
            },
        ],
        kml: &[],
    },
    Trip {
        id: "surf-desert",
        title: "Surf & Desert Escapade",
        image: "sandiego.jpg",
        meta: Bi::new("5 Tage \u{2022} Südkalifornien", "5 Days \u{2022} Southern California"),
        summary: Bi::new(
            "Morgens Surfen in La Jolla, nachts Sterne beobachten in der Anza-Borrego Wüste.",
            "Surf La Jolla in the morning, stargaze in the Anza-Borrego Desert at night.",
        ),
        stops: &[
            TripStop {
                day: Bi::new("Tag 1", "Day 1"),
                leg: Bi::same("San Diego \u{2192} La Jolla Beaches"),
                distance: Some("15 mi"),
                charger: Some(Bi::same("Supercharger: La Jolla UTC")),
            },
            TripStop {
                day: Bi::new("Tag 3", "Day 3"),
                leg: Bi::same("Anza-Borrego Desert State Park"),
                distance: Some("60 mi"),
                charger: Some(Bi::same("Destination Charger: Borrego Springs")),
            },
            TripStop {
                day: Bi::new("Tag 5", "Day 5"),
                leg: Bi::same("Palm Springs \u{2192} San Diego/Coronado"),
                distance: Some("125 mi"),
                charger: Some(Bi::same("Supercharger: Cabazon Outlets")),
            },
        ],
        kml: &[],
    },
    Trip {
        id: "lake-michigan",
        title: "Lake Michigan Loop",
        image: "chicago.jpg",
        meta: Bi::new("8 Tage \u{2022} Große Seen", "8 Days \u{2022} Great Lakes"),
        summary: Bi::new(
            "Rund um den Lake Michigan: Sanddünen, Hafenstädte in Door County und die Weingüter von Traverse City.",
            "Around Lake Michigan: sand dunes, Door County harbor towns and Traverse City wineries.",
        ),
        stops: &[
            TripStop {
                day: Bi::new("Tag 1-2", "Day 1-2"),
                leg: Bi::same("Chicago \u{2192} Milwaukee"),
                distance: Some("92 mi"),
                charger: Some(Bi::same("Supercharger: Milwaukee Market")),
            },
            TripStop {
                day: Bi::new("Tag 5-6", "Day 5-6"),
                leg: Bi::same("Mackinac Bridge \u{2192} Traverse City"),
                distance: Some("280 mi"),
                charger: Some(Bi::same("Supercharger: Traverse City")),
            },
            TripStop {
                day: Bi::new("Tag 8", "Day 8"),
                leg: Bi::same("Grand Rapids \u{2192} Indiana Dunes \u{2192} Chicago"),
                distance: Some("180 mi"),
                charger: Some(Bi::same("Supercharger: Grand Rapids, Indiana Dunes")),
            },
        ],
        kml: &[],
    },
];

pub struct Faq {
    pub question: Bi,
    pub answer: Bi,
}

pub static FAQ: &[Faq] = &[
    Faq {
        question: Bi::new(
            "Was ist im Tesla Camping Mietpreis enthalten?",
            "What is included in the Tesla Camping rental price?",
        ),
        answer: Bi::new(
            "Im Buchungspreis enthalten: Campingausrüstung, Versicherung, Tesla Supercharging, KI-Routenplaner App und Concierge Support ab $119/Tag. Zusätzlich: Kaution $250 (wird erstattet), Reinigung $50-150 bei Bedarf, Maut/Parkgebühren selbst.",
            "Included in the booking price: camping equipment, insurance, Tesla Supercharging, AI route planner app and concierge support from $119/day. Additional: $250 refundable deposit, $50-150 cleaning fee if needed, tolls/parking separate.",
        ),
    },
    Faq {
        question: Bi::new("Was ist die KI-Routenplaner App?", "What is the AI Route Planner App?"),
        answer: Bi::new(
            "Unsere Tour Guide App plant automatisch optimale Routen mit Ladestopps, zeigt versteckte Campingplätze und Nationalpark-Highlights und funktioniert auch offline.",
            "Our tour guide app automatically plans optimal routes with charging stops, shows hidden campsites and National Park highlights, and works offline.",
        ),
    },
    Faq {
        question: Bi::new(
            "Was bietet der Concierge Service?",
            "What does the Concierge Service offer?",
        ),
        answer: Bi::new(
            "Unser Concierge Service steht Ihnen 24/7 zur Verfügung, vor, während und nach Ihrer Reise: Routenplanung, Campingplatz-Reservierungen und Notfälle.",
            "Our concierge service is available 24/7, before, during and after your trip: route planning, campsite reservations and emergencies.",
        ),
    },
    Faq {
        question: Bi::new(
            "Ist das Tesla Supercharging wirklich kostenlos?",
            "Is Tesla Supercharging really free?",
        ),
        answer: Bi::new(
            "Ja! Die Nutzung des Tesla Supercharger-Netzwerks ist im Buchungspreis enthalten. Drittanbieter-Ladestationen sind nicht inklusive.",
            "Yes! Tesla Supercharger network usage is included in the booking price. Third-party charging stations are not included.",
        ),
    },
    Faq {
        question: Bi::new(
            "Wie weit kann ich mit einem Tesla fahren?",
            "How far can I drive on a single charge?",
        ),
        answer: Bi::new(
            "Der Model Y schafft ca. 330 Meilen (530 km), der Cybertruck ca. 340 Meilen (547 km).",
            "The Model Y covers approx. 330 miles (530 km), the Cybertruck approx. 340 miles (547 km).",
        ),
    },
    Faq {
        question: Bi::new(
            "Welche Nationalpark-Routen gibt es?",
            "What National Park routes are available?",
        ),
        answer: Bi::new(
            "Wir bieten 6 vorgeplante Routen: Grand Circle, Route 66, Rocky Mountains, Pacific Coast Highway, San Diego Desert Loop und Lake Michigan.",
            "We offer 6 pre-planned routes: Grand Circle, Route 66, Rocky Mountains, Pacific Coast Highway, San Diego Desert Loop and Lake Michigan.",
        ),
    },
    Faq {
        question: Bi::new("Wo kann ich den Tesla abholen?", "Where can I pick up the Tesla?"),
        answer: Bi::new(
            "Abholung ist möglich in Las Vegas (LAS), Los Angeles (LAX) und San Francisco (SFO).",
            "Pickup is available in Las Vegas (LAS), Los Angeles (LAX) and San Francisco (SFO).",
        ),
    },
    Faq {
        question: Bi::new("Ist eine Versicherung inklusive?", "Is insurance included?"),
        answer: Bi::new(
            "Ja, eine umfassende Versicherung ist im Buchungspreis enthalten. Mautgebühren und Parkkosten trägt der Kunde.",
            "Yes, comprehensive insurance is included in the booking price. Tolls and parking are paid by the customer.",
        ),
    },
];

pub struct ValueProp {
    pub title: Bi,
    pub text: Bi,
}

pub static VALUE_PROPS: &[ValueProp] = &[
    ValueProp {
        title: Bi::new("Geprüfte Partner", "Vetted Partners"),
        text: Bi::new(
            "Jeder Mietpartner wird sorgfältig ausgewählt und geprüft.",
            "Every rental partner is carefully selected and vetted.",
        ),
    },
    ValueProp {
        title: Bi::new("KI-Routenplaner", "AI Route Planner"),
        text: Bi::new(
            "Jeder Kunde erhält Zugang zu unserer Routing-App für perfekte Ladestopps.",
            "Every customer gets our routing app for perfect charging stops.",
        ),
    },
    ValueProp {
        title: Bi::new("Persönlicher Service", "Personal Service"),
        text: Bi::new(
            "24/7 Support auf Deutsch und Englisch, von der Buchung bis zur Rückgabe.",
            "24/7 support in German and English, from booking to return.",
        ),
    },
];

/// In-page navigation anchors shown in the header.
pub static NAV_ITEMS: &[(&str, Bi)] = &[
    ("/#booking-bar", Bi::new("Reise Planen", "Plan Your Trip")),
    ("/flotte", Bi::new("E-Flotte", "E-Fleet")),
    ("/routen", Bi::new("Routen", "Routes")),
    ("/preise", Bi::new("Preise", "Pricing")),
    ("/#founder", Bi::new("Über uns", "About")),
];

/// Pickup options in the static booking form as (value, label). Checkout
/// accepts more locations than the form offers.
pub static PICKUP_LOCATIONS: &[(&str, &str)] = &[
    ("Los Angeles", "Los Angeles, CA"),
    ("Las Vegas", "Las Vegas, NV"),
];

pub struct Testimonial {
    pub image: &'static str,
    pub alt: &'static str,
    pub quote: Bi,
    pub name: &'static str,
    pub detail: Bi,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        image: "tesla_red_client.jpg",
        alt: "Remo M. Kundenbewertung Tesla Model Y Camping USA",
        quote: Bi::new(
            "Wir sind große Fans von Nachhaltigkeit. Dieses E-Auto hat unseren Roadtrip unglaublich erschwinglich und unkompliziert gemacht!",
            "We are big fans of sustainability. This EV made our road trip incredibly affordable and hassle-free!",
        ),
        name: "Remo M.",
        detail: Bi::new("Schweiz \u{2022} Tesla Model Y", "Switzerland \u{2022} Tesla Model Y"),
    },
    Testimonial {
        image: "cybertruckreview.jpg",
        alt: "Katja L. Kundenbewertung Tesla Cybertruck Camping",
        quote: Bi::new(
            "Amerika mit dem Cybertruck zu bereisen war ein einzigartiges Abenteuer. Wir fühlten uns bereit für jedes Terrain!",
            "Traveling America with the Cybertruck was a unique adventure. We felt ready for any terrain!",
        ),
        name: "Katja L.",
        detail: Bi::new("Deutschland \u{2022} Tesla Cybertruck", "Germany \u{2022} Tesla Cybertruck"),
    },
    Testimonial {
        image: "anna_testamony.jpg",
        alt: "Anna S. Kundenbewertung Tesla Model Y USA Roadtrip",
        quote: Bi::new(
            "Fantastische Reise entlang des Pacific Coast Highway! Der Tesla war perfekt für unser Abenteuer. Sehr empfehlenswert!",
            "Fantastic trip along the Pacific Coast Highway! The Tesla was perfect for our adventure. Highly recommended!",
        ),
        name: "Anna S.",
        detail: Bi::new("Dänemark \u{2022} Tesla Model Y", "Denmark \u{2022} Tesla Model Y"),
    },
];

/// A story paragraph; `lead` and `tail` render bold around `text`.
pub struct Paragraph {
    pub lead: Option<Bi>,
    pub text: Bi,
    pub tail: Option<Bi>,
}

impl Paragraph {
    const fn plain(text: Bi) -> Self {
        Self {
            lead: None,
            text,
            tail: None,
        }
    }
}

pub struct FounderCard {
    pub label: Bi,
    /// Extra class on the card, e.g. `blue`.
    pub accent: Option<&'static str>,
    pub paragraphs: &'static [Paragraph],
}

pub const FOUNDER_NAME: &str = "Anja Gutierrez";

pub static FOUNDER_CARDS: &[FounderCard] = &[
    FounderCard {
        label: Bi::new(
            "Der Weg: Von Ostdeutschland zum Algorithmus",
            "The Path: From East Germany to the Algorithm",
        ),
        accent: None,
        paragraphs: &[
            Paragraph::plain(Bi::new(
                "Ich bin in Ostdeutschland aufgewachsen und habe dort Informatik studiert, bevor ich nach Los Angeles \u{2013} Santa Monica zog. Parallel lernte ich bei einer Schweizer Sightseeing-Firma, wie man erstklassige Reiseerlebnisse konzipiert. Zwei Welten, die ich später verschmelzen würde.",
                "Raised in East Germany, I studied Computer Science there before moving to Los Angeles \u{2014} Santa Monica. At the same time, I learned at a Swiss sightseeing firm how to design first-class travel experiences. Two worlds I would later fuse.",
            )),
            Paragraph::plain(Bi::new(
                "Als ich allein mit meinem Sohn die USA im Elektroauto durchquerte, lernte ich: Reichweitenangst ist kein Schicksal, sondern das Resultat fehlender Daten. Als Informatikerin habe ich das nicht als Risiko begriffen, sondern als logische Herausforderung \u{2014} und sie gelöst.",
                "When I crossed the USA alone with my son in an electric car, I learned: Range anxiety isn't fate, it's the result of missing data. As a computer scientist, I understood this not as a risk, but as a logical challenge\u{2014}and I solved it.",
            )),
            Paragraph {
                lead: None,
                text: Bi::new(
                    "Tausende Meilen durch die entlegensten Wüsten Amerikas haben mein System geschmiedet. Wenn ich es als Alleinerziehende sicher geschafft habe, ist das der Beweis: ",
                    "Thousands of miles through America's most remote deserts forged my system. If I made it safely as a single mother, that's the proof: ",
                ),
                tail: Some(Bi::new("Sie können es auch.", "So can you.")),
            },
        ],
    },
    FounderCard {
        label: Bi::new(
            "Das System: Ihr intelligentes Buchungspaket",
            "The System: Your Intelligent Booking Package",
        ),
        accent: Some("blue"),
        paragraphs: &[
            Paragraph::plain(Bi::new(
                "Kein simples Mietauto \u{2014} ein kuratiertes Roadtrip-Paket: Tesla, Camping-Ausrüstung, intelligente Routenplanung und persönlicher Concierge als geschlossenes System, gebucht über meine Plattform:",
                "Not a simple rental car\u{2014}a curated roadtrip package: Tesla, camping gear, intelligent route planning, and personal concierge as a closed system, booked through my platform:",
            )),
            Paragraph {
                lead: Some(Bi::new("Der digitale Co-Pilot", "The Digital Co-Pilot")),
                text: Bi::new(
                    " \u{2014} Unsere eigenständige App gibt der Tesla-Telemetrie eine Seele. Sie berechnet nicht nur Ladestopps \u{2014} sie verwandelt jeden Kilometer in ein Erlebnis: versteckte Wasserfälle, lokale Geheimtipps, Nationalpark-Highlights. 7 KI-Reisepersönlichkeiten begleiten Sie unterwegs. Sie erleben, staunen, entdecken \u{2014} und kommen garantiert an.",
                    " \u{2014} Our standalone app gives Tesla's telemetry a soul. It doesn't just calculate charging stops \u{2014} it transforms every mile into an experience: hidden waterfalls, local insider tips, national park highlights. 7 AI travel personas guide you along the way. You experience, wonder, discover \u{2014} and arrive guaranteed.",
                ),
                tail: None,
            },
            Paragraph {
                lead: Some(Bi::same("Klausy Concierge Buddy")),
                text: Bi::new(
                    " \u{2014} Ihr KI-Reisebegleiter mit logischer Datenanalyse und meiner persönlichen Erfahrung. Supercharger, Insider-Spots, Echtzeit-Backup.",
                    " \u{2014} Your AI travel companion with logical data analysis and my personal experience. Superchargers, insider spots, real-time backup.",
                ),
                tail: None,
            },
            Paragraph {
                lead: None,
                text: Bi::new(
                    "Die Technik arbeitet lautlos im Hintergrund. ",
                    "The technology works silently in the background. ",
                ),
                tail: Some(Bi::new(
                    "Sie konzentrieren sich auf das Staunen \u{2014} ich garantiere die Energie.",
                    "You focus on the wonder\u{2014}I guarantee the energy.",
                )),
            },
        ],
    },
];

pub const FOUNDER_QUOTE: Bi = Bi::new(
    "\u{201e}Sicherheit ist die Freiheit, nicht mehr über die Technik nachdenken zu müssen.\u{201c}",
    "\"Security is the freedom to no longer think about the technology.\"",
);

/// App feature chips as (icon class, label).
pub static APP_FEATURES: &[(&str, Bi)] = &[
    ("fas fa-route", Bi::new("KI-Routenplanung", "AI Route Planning")),
    ("fas fa-charging-station", Bi::new("Supercharger-Stops", "Supercharger Stops")),
    ("fas fa-users", Bi::new("7 KI-Personas", "7 AI Personas")),
    ("fas fa-gem", Bi::new("Geheimtipps", "Hidden Gems")),
    ("fas fa-campground", Bi::new("Campingplätze", "Campsites")),
    ("fas fa-mountain", Bi::new("Nationalparks", "National Parks")),
];

pub struct RouteStep {
    pub icon: &'static str,
    pub title: Bi,
    pub text: Bi,
}

/// The route download workflow, in order.
pub static ROUTE_STEPS: &[RouteStep] = &[
    RouteStep {
        icon: "fas fa-map-marked-alt",
        title: Bi::new("Route wählen", "Choose a Route"),
        text: Bi::new(
            "Wählen Sie eine unserer 6 vorgeplanten Nationalpark-Routen \u{2014} von 5-Tage-Kurztrips bis zum 14-Tage Route 66 Abenteuer.",
            "Pick one of our 6 pre-planned National Park routes \u{2014} from 5-day short trips to the 14-day Route 66 adventure.",
        ),
    },
    RouteStep {
        icon: "fas fa-download",
        title: Bi::new("KML herunterladen", "Download KML"),
        text: Bi::new(
            "Laden Sie die KML-Datei herunter und öffnen Sie sie in Google Earth, Google Maps oder jeder GPS-App. Die Route enthält alle Stops und Ladestationen.",
            "Download the KML file and open it in Google Earth, Google Maps, or any GPS app. The route includes all stops and charging stations.",
        ),
    },
    RouteStep {
        icon: "fas fa-bolt",
        title: Bi::new("Ladestopps geplant", "Charging Planned"),
        text: Bi::new(
            "Jede Route enthält Tesla Supercharger und Destination Charger entlang der Strecke. Keine Reichweitenangst.",
            "Every route includes Tesla Superchargers and Destination Chargers along the way. No range anxiety.",
        ),
    },
    RouteStep {
        icon: "fas fa-campground",
        title: Bi::new("Losfahren & Campen", "Drive & Camp"),
        text: Bi::new(
            "Fahren Sie los! Ihr Tesla und die Campingausrüstung sind bereit. Campen Sie direkt an den Nationalparks.",
            "Hit the road! Your Tesla and camping gear are ready. Camp right at the National Parks.",
        ),
    },
];
