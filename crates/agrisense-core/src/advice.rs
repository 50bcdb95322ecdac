//! Static cause and treatment reference for the 38 classifier labels.
//!
//! Used by the local diagnosis path: after the classifier names a label, the
//! matching entry supplies the cause and prevention text for the response.
//! Labels without an entry fall back to deriving crop/disease strings from
//! the label itself.

/// Reference entry for one classifier label.
pub struct AdviceEntry {
    /// Exact classifier label this entry keys on.
    pub label: &'static str,
    pub crop: &'static str,
    pub disease: &'static str,
    pub causes: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

/// Look up the advice entry for a classifier label.
pub fn advice_for(label: &str) -> Option<&'static AdviceEntry> {
    ADVICE_TABLE.iter().find(|e| e.label == label)
}

/// Fallback text used when a label has no advice entry.
pub const FALLBACK_CAUSE: &str = "Detailed information not available in local database.";
pub const FALLBACK_PREVENTION: &str = "Please consult an expert or try a clearer photo.";

/// Cause/prevention reference for every label the classifier can emit.
pub const ADVICE_TABLE: &[AdviceEntry] = &[
    AdviceEntry {
        label: "Apple___Apple_scab",
        crop: "Apple",
        disease: "Apple Scab",
        causes: &[
            "Fungus Venturia inaequalis overwintering in fallen leaves.",
            "Spores released during cool, wet spring weather infect young foliage and fruit.",
        ],
        prevention: &[
            "Rake and destroy fallen leaves after harvest.",
            "Prune the canopy to improve air circulation and drying.",
            "Apply a protective fungicide from green tip until petal fall.",
        ],
    },
    AdviceEntry {
        label: "Apple___Black_rot",
        crop: "Apple",
        disease: "Black Rot",
        causes: &[
            "Fungus Botryosphaeria obtusa surviving in cankers and mummified fruit.",
            "Infection enters through wounds, pruning cuts and leaf scars.",
        ],
        prevention: &[
            "Remove mummified fruit and prune out cankered limbs.",
            "Burn or bury pruning debris instead of leaving it in the orchard.",
            "Maintain a fungicide program from silver tip onward.",
        ],
    },
    AdviceEntry {
        label: "Apple___Cedar_apple_rust",
        crop: "Apple",
        disease: "Cedar Apple Rust",
        causes: &[
            "Fungus Gymnosporangium juniperi-virginianae alternating between apple and juniper hosts.",
            "Spring rains release spores from galls on nearby cedar trees.",
        ],
        prevention: &[
            "Remove juniper and cedar hosts within a few hundred metres where practical.",
            "Plant resistant cultivars.",
            "Apply fungicide from pink bud through first cover.",
        ],
    },
    AdviceEntry {
        label: "Apple___healthy",
        crop: "Apple",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Continue routine scouting through the season.",
            "Keep a balanced feeding and irrigation schedule.",
        ],
    },
    AdviceEntry {
        label: "Blueberry___healthy",
        crop: "Blueberry",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Maintain acidic soil and steady moisture.",
            "Monitor new growth for spots or dieback.",
        ],
    },
    AdviceEntry {
        label: "Cherry_(including_sour)___Powdery_mildew",
        crop: "Cherry",
        disease: "Powdery Mildew",
        causes: &[
            "Fungus Podosphaera clandestina favoured by warm days and humid nights.",
            "Dense, shaded canopies that stay damp after irrigation.",
        ],
        prevention: &[
            "Prune for an open canopy and good airflow.",
            "Avoid excess nitrogen that drives soft, susceptible growth.",
            "Apply sulfur or another labelled fungicide at shuck fall.",
        ],
    },
    AdviceEntry {
        label: "Cherry_(including_sour)___healthy",
        crop: "Cherry",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Keep pruning wounds clean and well timed.",
            "Scout regularly during humid spells.",
        ],
    },
    AdviceEntry {
        label: "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
        crop: "Corn",
        disease: "Gray Leaf Spot",
        causes: &[
            "Fungus Cercospora zeae-maydis surviving in corn residue on the soil surface.",
            "Extended warm, humid periods with heavy dews.",
        ],
        prevention: &[
            "Rotate away from corn for at least one season.",
            "Bury or remove infected residue.",
            "Plant resistant hybrids and apply fungicide around tasseling if pressure is high.",
        ],
    },
    AdviceEntry {
        label: "Corn_(maize)___Common_rust_",
        crop: "Corn",
        disease: "Common Rust",
        causes: &[
            "Fungus Puccinia sorghi, with spores carried long distances on wind.",
            "Cool, moist weather during rapid leaf growth.",
        ],
        prevention: &[
            "Plant resistant hybrids.",
            "Sow early so grain fill precedes peak rust pressure.",
            "Apply fungicide if pustules appear before silking.",
        ],
    },
    AdviceEntry {
        label: "Corn_(maize)___Northern_Leaf_Blight",
        crop: "Corn",
        disease: "Northern Leaf Blight",
        causes: &[
            "Fungus Exserohilum turcicum overwintering in infected residue.",
            "Moderate temperatures with long leaf-wetness periods.",
        ],
        prevention: &[
            "Use resistant hybrids.",
            "Rotate crops and manage residue.",
            "Time fungicide to protect the upper leaves around tasseling.",
        ],
    },
    AdviceEntry {
        label: "Corn_(maize)___healthy",
        crop: "Corn",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Keep scouting through grain fill.",
            "Maintain balanced fertility to avoid stress.",
        ],
    },
    AdviceEntry {
        label: "Grape___Black_rot",
        crop: "Grape",
        disease: "Black Rot",
        causes: &[
            "Fungus Guignardia bidwellii overwintering in mummified berries and infected canes.",
            "Warm, humid weather during bloom and early berry development.",
        ],
        prevention: &[
            "Remove mummified berries and prune out infected wood in winter.",
            "Keep an open canopy so clusters dry quickly.",
            "Spray fungicide from bud break through bunch closure.",
        ],
    },
    AdviceEntry {
        label: "Grape___Esca_(Black_Measles)",
        crop: "Grape",
        disease: "Esca (Black Measles)",
        causes: &[
            "Wood-rotting fungi such as Phaeomoniella chlamydospora entering pruning wounds.",
            "Vine stress from drought or trunk injuries accelerating symptoms.",
        ],
        prevention: &[
            "Prune late in dormancy during dry weather and protect large wounds.",
            "Remove and destroy dead or declining wood.",
            "Avoid water stress with even irrigation.",
        ],
    },
    AdviceEntry {
        label: "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
        crop: "Grape",
        disease: "Isariopsis Leaf Spot",
        causes: &[
            "Fungus Pseudocercospora vitis attacking foliage in warm, humid late-season conditions.",
            "Spores splashed from fallen infected leaves.",
        ],
        prevention: &[
            "Clean up fallen leaves after the season.",
            "Maintain canopy airflow with shoot positioning.",
            "Continue protective sprays late into the season in wet years.",
        ],
    },
    AdviceEntry {
        label: "Grape___healthy",
        crop: "Grape",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Keep the canopy open and clusters exposed.",
            "Scout weekly through veraison.",
        ],
    },
    AdviceEntry {
        label: "Orange___Haunglongbing_(Citrus_greening)",
        crop: "Orange",
        disease: "Huanglongbing (Citrus Greening)",
        causes: &[
            "Bacterium Candidatus Liberibacter asiaticus spread by the Asian citrus psyllid.",
            "Movement of infected nursery stock.",
        ],
        prevention: &[
            "Control psyllid populations with monitoring and targeted treatment.",
            "Remove infected trees promptly; there is no cure once infected.",
            "Plant only certified disease-free stock.",
        ],
    },
    AdviceEntry {
        label: "Peach___Bacterial_spot",
        crop: "Peach",
        disease: "Bacterial Spot",
        causes: &[
            "Bacterium Xanthomonas arboricola pv. pruni spread by wind-driven rain.",
            "Trees on light sandy soils or under stress are hit hardest.",
        ],
        prevention: &[
            "Plant tolerant cultivars on exposed sites.",
            "Apply copper sprays at leaf drop and again before bloom.",
            "Maintain tree vigor with balanced nutrition.",
        ],
    },
    AdviceEntry {
        label: "Peach___healthy",
        crop: "Peach",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Keep up orchard sanitation.",
            "Watch for spotting after storms.",
        ],
    },
    AdviceEntry {
        label: "Pepper,_bell___Bacterial_spot",
        crop: "Bell Pepper",
        disease: "Bacterial Spot",
        causes: &[
            "Xanthomonas bacteria carried on seed and transplants.",
            "Spread by splashing water and handling wet plants.",
        ],
        prevention: &[
            "Start from certified clean seed and transplants.",
            "Rotate away from peppers and tomatoes for two to three years.",
            "Apply copper sprays and avoid working the crop while wet.",
        ],
    },
    AdviceEntry {
        label: "Pepper,_bell___healthy",
        crop: "Bell Pepper",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Water at the base rather than overhead.",
            "Continue regular scouting.",
        ],
    },
    AdviceEntry {
        label: "Potato___Early_blight",
        crop: "Potato",
        disease: "Early Blight",
        causes: &[
            "Fungus Alternaria solani surviving in soil and infected residue.",
            "Alternating wet and dry spells on stressed or ageing plants.",
        ],
        prevention: &[
            "Rotate with non-host crops.",
            "Keep plants vigorous with balanced fertility and even watering.",
            "Apply protective fungicide when lesions first appear on lower leaves.",
        ],
    },
    AdviceEntry {
        label: "Potato___Late_blight",
        crop: "Potato",
        disease: "Late Blight",
        causes: &[
            "Oomycete Phytophthora infestans in cool, wet weather.",
            "Inoculum from infected seed tubers, cull piles and volunteers.",
        ],
        prevention: &[
            "Plant certified seed and destroy cull piles and volunteers.",
            "Apply preventive fungicide ahead of blight-favourable weather.",
            "Kill vines before harvest to protect tubers.",
        ],
    },
    AdviceEntry {
        label: "Potato___healthy",
        crop: "Potato",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Hill soil well to protect tubers.",
            "Scout lower leaves weekly.",
        ],
    },
    AdviceEntry {
        label: "Raspberry___healthy",
        crop: "Raspberry",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Thin canes for airflow.",
            "Remove spent canes after fruiting.",
        ],
    },
    AdviceEntry {
        label: "Soybean___healthy",
        crop: "Soybean",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Keep an eye out for defoliation or spotting.",
            "Rotate crops to keep pressure low.",
        ],
    },
    AdviceEntry {
        label: "Squash___Powdery_mildew",
        crop: "Squash",
        disease: "Powdery Mildew",
        causes: &[
            "Fungus Podosphaera xanthii thriving in high humidity and shade.",
            "Dense plantings with poor air movement.",
        ],
        prevention: &[
            "Choose resistant varieties and plant in full sun with wide spacing.",
            "Apply sulfur or potassium bicarbonate at the first white patches.",
            "Remove heavily infected leaves.",
        ],
    },
    AdviceEntry {
        label: "Strawberry___Leaf_scorch",
        crop: "Strawberry",
        disease: "Leaf Scorch",
        causes: &[
            "Fungus Diplocarpon earlianum overwintering on old infected leaves.",
            "Spores spread by splashing rain and irrigation.",
        ],
        prevention: &[
            "Renovate beds after harvest and remove old foliage.",
            "Improve drainage and spacing so leaves dry quickly.",
            "Apply fungicide in early spring where scorch recurs.",
        ],
    },
    AdviceEntry {
        label: "Strawberry___healthy",
        crop: "Strawberry",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Mulch to keep fruit off the soil.",
            "Renovate beds annually.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Bacterial_spot",
        crop: "Tomato",
        disease: "Bacterial Spot",
        causes: &[
            "Xanthomonas bacteria introduced on seed or transplants.",
            "Warm, wet weather with splashing rain spreading the bacteria.",
        ],
        prevention: &[
            "Use clean seed and inspect transplants carefully.",
            "Rotate away from tomato and pepper ground.",
            "Apply copper sprays and avoid overhead watering.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Early_blight",
        crop: "Tomato",
        disease: "Early Blight",
        causes: &[
            "Fungus Alternaria species carried over in soil and debris.",
            "Humid weather attacking lower, shaded leaves first.",
        ],
        prevention: &[
            "Stake plants and mulch to stop soil splash.",
            "Strip infected lower leaves early.",
            "Rotate beds and apply fungicide when spots spread.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Late_blight",
        crop: "Tomato",
        disease: "Late Blight",
        causes: &[
            "Oomycete Phytophthora infestans in cool, wet conditions.",
            "Wind-borne spores from nearby infected tomato or potato plants.",
        ],
        prevention: &[
            "Destroy infected plants immediately; the disease spreads fast.",
            "Avoid overhead irrigation and water early in the day.",
            "Use preventive fungicide and resistant varieties in blight-prone areas.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Leaf_Mold",
        crop: "Tomato",
        disease: "Leaf Mold",
        causes: &[
            "Fungus Passalora fulva under sustained high humidity.",
            "Poor ventilation in greenhouses and tunnels.",
        ],
        prevention: &[
            "Ventilate to keep relative humidity below about 85 percent.",
            "Water at the base and space plants generously.",
            "Remove crop debris and choose resistant varieties.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Septoria_leaf_spot",
        crop: "Tomato",
        disease: "Septoria Leaf Spot",
        causes: &[
            "Fungus Septoria lycopersici surviving on debris and weed hosts.",
            "Rain splash carrying spores onto lower leaves.",
        ],
        prevention: &[
            "Rotate beds and clear solanaceous weeds.",
            "Mulch and remove infected lower leaves.",
            "Apply fungicide during prolonged wet spells.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Spider_mites Two-spotted_spider_mite",
        crop: "Tomato",
        disease: "Two-Spotted Spider Mite",
        causes: &[
            "Mite Tetranychus urticae multiplying rapidly in hot, dry, dusty conditions.",
            "Drought-stressed plants with natural predators knocked out.",
        ],
        prevention: &[
            "Hose down leaf undersides to break up colonies.",
            "Keep plants well watered and dust down.",
            "Use insecticidal soap or encourage predatory mites.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Target_Spot",
        crop: "Tomato",
        disease: "Target Spot",
        causes: &[
            "Fungus Corynespora cassiicola in warm, humid weather.",
            "Dense canopies holding leaf wetness overnight.",
        ],
        prevention: &[
            "Open the canopy with pruning and wider spacing.",
            "Rotate crops and remove debris.",
            "Apply fungicide when ring-patterned spots appear.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
        crop: "Tomato",
        disease: "Tomato Yellow Leaf Curl Virus",
        causes: &[
            "Begomovirus transmitted by the silverleaf whitefly.",
            "Infected transplants introducing the virus to clean fields.",
        ],
        prevention: &[
            "Control whiteflies with screens, traps and targeted sprays.",
            "Remove and bag infected plants; there is no cure.",
            "Plant resistant varieties and use reflective mulch.",
        ],
    },
    AdviceEntry {
        label: "Tomato___Tomato_mosaic_virus",
        crop: "Tomato",
        disease: "Tomato Mosaic Virus",
        causes: &[
            "Highly stable virus spread by contact: hands, tools and stakes.",
            "Contaminated seed and infected plant debris in soil.",
        ],
        prevention: &[
            "Disinfect tools and wash hands before handling plants.",
            "Remove infected plants together with surrounding debris.",
            "Use resistant cultivars and clean seed.",
        ],
    },
    AdviceEntry {
        label: "Tomato___healthy",
        crop: "Tomato",
        disease: "Healthy",
        causes: &["No disease detected on the leaf."],
        prevention: &[
            "Keep watering even to prevent stress.",
            "Scout under leaves for early trouble.",
        ],
    },
];
