// ============================================================
// Layer 5 - Word Lists
// ============================================================
// Static word lists shared by the sentence splitter, the POS
// tagger and the NE chunker. All entries are lowercase.

/// Words that end in a period without ending the sentence
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft",
    "rev", "hon", "gen", "col", "capt", "lt", "sgt", "cpl", "maj", "gov",
    "sen", "rep", "pres", "supt", "messrs", "mme", "mlle",
    "etc", "vs", "viz", "cf", "al", "approx", "dept", "fig",
    "vol", "inc", "ltd", "co", "corp", "bros", "ave", "blvd", "rd",
    "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "tues", "thur", "thurs",
];

/// Honorifics that mark the following proper noun as a person
pub const TITLES: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "miss", "dr", "dr.",
    "prof", "prof.", "sir", "lady", "lord", "madam", "madame",
    "mister", "captain", "capt.", "uncle", "aunt", "king", "queen",
    "prince", "princess", "rev.", "sgt.", "lt.", "col.", "gen.",
];

/// Closed-class and very common words with their Penn Treebank tag
pub const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "IN"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"),
    ("some", "DT"), ("any", "DT"), ("no", "DT"), ("all", "DT"),
    ("another", "DT"), ("both", "DT"), ("either", "DT"), ("neither", "DT"),
    // prepositions and subordinators
    ("in", "IN"), ("on", "IN"), ("at", "IN"), ("of", "IN"), ("for", "IN"),
    ("with", "IN"), ("by", "IN"), ("from", "IN"), ("into", "IN"),
    ("onto", "IN"), ("over", "IN"), ("under", "IN"), ("about", "IN"),
    ("after", "IN"), ("before", "IN"), ("through", "IN"), ("during", "IN"),
    ("without", "IN"), ("between", "IN"), ("against", "IN"), ("among", "IN"),
    ("upon", "IN"), ("near", "IN"), ("behind", "IN"), ("across", "IN"),
    ("since", "IN"), ("until", "IN"), ("because", "IN"), ("if", "IN"),
    ("while", "IN"), ("although", "IN"), ("though", "IN"), ("as", "IN"),
    ("than", "IN"), ("around", "IN"), ("inside", "IN"), ("outside", "IN"),
    ("toward", "IN"), ("towards", "IN"), ("beside", "IN"), ("below", "IN"),
    ("above", "IN"), ("beyond", "IN"), ("like", "IN"), ("off", "IN"),
    ("to", "TO"),
    // pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"),
    ("it", "PRP"), ("we", "PRP"), ("they", "PRP"), ("me", "PRP"),
    ("him", "PRP"), ("us", "PRP"), ("them", "PRP"), ("myself", "PRP"),
    ("himself", "PRP"), ("herself", "PRP"), ("itself", "PRP"),
    ("themselves", "PRP"), ("yourself", "PRP"), ("ourselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"),
    ("its", "PRP$"), ("our", "PRP$"), ("their", "PRP$"),
    // wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("which", "WDT"),
    ("whose", "WP$"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"),
    ("how", "WRB"),
    // conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"),
    ("yet", "CC"), ("so", "CC"), ("&", "CC"),
    // modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"),
    ("shall", "MD"), ("should", "MD"), ("may", "MD"), ("might", "MD"),
    ("must", "MD"), ("'ll", "MD"), ("'d", "MD"), ("wo", "MD"), ("ca", "MD"),
    // auxiliaries and frequent irregular verbs
    ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("be", "VB"), ("been", "VBN"), ("being", "VBG"),
    ("'s", "POS"), ("'re", "VBP"), ("'m", "VBP"), ("'ve", "VBP"),
    ("has", "VBZ"), ("have", "VBP"), ("had", "VBD"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"),
    ("went", "VBD"), ("gone", "VBN"), ("came", "VBD"), ("saw", "VBD"),
    ("seen", "VBN"), ("said", "VBD"), ("told", "VBD"), ("took", "VBD"),
    ("taken", "VBN"), ("gave", "VBD"), ("given", "VBN"), ("made", "VBD"),
    ("found", "VBD"), ("thought", "VBD"), ("knew", "VBD"), ("known", "VBN"),
    ("got", "VBD"), ("ran", "VBD"), ("sat", "VBD"), ("stood", "VBD"),
    ("felt", "VBD"), ("left", "VBD"), ("began", "VBD"), ("brought", "VBD"),
    ("heard", "VBD"), ("kept", "VBD"), ("held", "VBD"), ("met", "VBD"),
    ("lost", "VBD"), ("won", "VBD"), ("fell", "VBD"), ("ate", "VBD"),
    ("wrote", "VBD"), ("spoke", "VBD"), ("became", "VBD"), ("led", "VBD"),
    // adverbs and particles
    ("not", "RB"), ("n't", "RB"), ("very", "RB"), ("never", "RB"),
    ("always", "RB"), ("then", "RB"), ("here", "RB"), ("also", "RB"),
    ("just", "RB"), ("too", "RB"), ("now", "RB"), ("soon", "RB"),
    ("again", "RB"), ("still", "RB"), ("already", "RB"), ("often", "RB"),
    ("once", "RB"), ("even", "RB"), ("away", "RB"), ("back", "RB"),
    ("later", "RB"), ("meanwhile", "RB"), ("yesterday", "NN"),
    ("today", "NN"), ("tomorrow", "NN"), ("tonight", "NN"),
    ("afterwards", "RB"), ("afterward", "RB"), ("perhaps", "RB"),
    ("maybe", "RB"), ("however", "RB"), ("instead", "RB"),
    ("sometimes", "RB"), ("together", "RB"), ("ago", "RB"),
    ("almost", "RB"), ("everywhere", "RB"), ("somewhere", "RB"),
    ("nowhere", "RB"), ("anyway", "RB"), ("besides", "RB"),
    ("up", "RP"), ("down", "RP"), ("out", "RP"),
    ("there", "EX"),
    // indefinite pronouns
    ("everyone", "NN"), ("everybody", "NN"), ("everything", "NN"),
    ("someone", "NN"), ("somebody", "NN"), ("something", "NN"),
    ("anyone", "NN"), ("anybody", "NN"), ("anything", "NN"),
    ("nobody", "NN"), ("nothing", "NN"), ("none", "NN"),
    // interjections
    ("oh", "UH"), ("yes", "UH"), ("hello", "UH"), ("hey", "UH"),
    ("well", "UH"), ("please", "UH"), ("ah", "UH"), ("hi", "UH"),
    ("ok", "UH"), ("okay", "UH"), ("wow", "UH"),
    // number words
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"),
    ("five", "CD"), ("six", "CD"), ("seven", "CD"), ("eight", "CD"),
    ("nine", "CD"), ("ten", "CD"), ("hundred", "CD"), ("thousand", "CD"),
    // frequent nouns and adjectives that would otherwise hit suffix rules
    ("home", "NN"), ("house", "NN"), ("day", "NN"), ("night", "NN"),
    ("time", "NN"), ("man", "NN"), ("woman", "NN"), ("people", "NNS"),
    ("children", "NNS"), ("men", "NNS"), ("women", "NNS"),
    ("good", "JJ"), ("bad", "JJ"), ("old", "JJ"), ("new", "JJ"),
    ("big", "JJ"), ("small", "JJ"), ("little", "JJ"), ("long", "JJ"),
    ("great", "JJ"), ("young", "JJ"), ("happy", "JJ"), ("sad", "JJ"),
    ("many", "JJ"), ("much", "JJ"), ("other", "JJ"), ("only", "RB"),
    ("first", "JJ"), ("last", "JJ"), ("next", "JJ"), ("few", "JJ"),
    ("less", "JJR"), ("unless", "IN"),
];

/// Words that make a proper-noun span an organization
pub const ORGANIZATION_KEYWORDS: &[&str] = &[
    "inc", "corp", "corporation", "company", "co", "ltd", "llc", "plc",
    "university", "college", "school", "academy", "institute", "bank",
    "church", "association", "committee", "council", "department",
    "ministry", "agency", "party", "club", "society", "foundation",
    "group", "army", "navy", "police", "government", "parliament",
    "congress", "senate", "court", "union", "league", "federation",
    "times", "news", "press", "records", "airlines", "motors",
];

/// Words that make a proper-noun span a natural or named location
pub const LOCATION_KEYWORDS: &[&str] = &[
    "river", "mountain", "mountains", "mount", "lake", "ocean", "sea",
    "forest", "valley", "island", "islands", "desert", "bay", "gulf",
    "street", "road", "avenue", "lane", "park", "hill", "hills", "creek",
    "coast", "canyon", "woods", "peninsula", "falls", "glacier", "cape",
];

/// Words that make a proper-noun span a facility
pub const FACILITY_KEYWORDS: &[&str] = &[
    "bridge", "airport", "tower", "hospital", "station", "castle",
    "palace", "hotel", "stadium", "museum", "temple", "cathedral",
    "library", "theatre", "theater", "prison", "mall", "harbor",
    "harbour", "abbey", "arena",
];

/// Geo-political entities: countries, states and major cities
pub const GPE_GAZETTEER: &[&str] = &[
    // countries
    "afghanistan", "albania", "algeria", "argentina", "armenia",
    "australia", "austria", "bangladesh", "belgium", "bolivia", "brazil",
    "britain", "bulgaria", "cambodia", "canada", "chile", "china",
    "colombia", "croatia", "cuba", "czechia", "denmark", "egypt",
    "england", "estonia", "ethiopia", "finland", "france", "germany",
    "ghana", "greece", "hungary", "iceland", "india", "indonesia", "iran",
    "iraq", "ireland", "israel", "italy", "jamaica", "japan", "jordan",
    "kenya", "korea", "latvia", "lebanon", "libya", "lithuania",
    "malaysia", "mexico", "mongolia", "morocco", "nepal", "netherlands",
    "nigeria", "norway", "pakistan", "peru", "philippines", "poland",
    "portugal", "romania", "russia", "scotland", "serbia", "singapore",
    "slovakia", "somalia", "spain", "sudan", "sweden", "switzerland",
    "syria", "taiwan", "thailand", "tunisia", "turkey", "uganda",
    "ukraine", "uruguay", "venezuela", "vietnam", "wales", "yemen",
    "zimbabwe", "america", "new zealand", "south africa",
    "united states", "united kingdom", "north korea", "south korea",
    "saudi arabia", "soviet union",
    // us states
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado",
    "connecticut", "delaware", "florida", "georgia", "hawaii", "idaho",
    "illinois", "indiana", "iowa", "kansas", "kentucky", "louisiana",
    "maine", "maryland", "massachusetts", "michigan", "minnesota",
    "mississippi", "missouri", "montana", "nebraska", "nevada", "ohio",
    "oklahoma", "oregon", "pennsylvania", "tennessee", "texas", "utah",
    "vermont", "virginia", "washington", "wisconsin", "wyoming",
    "new jersey", "new mexico", "new york", "north carolina",
    "south carolina", "north dakota", "south dakota", "west virginia",
    "rhode island", "new hampshire",
    // cities
    "london", "paris", "berlin", "madrid", "rome", "moscow", "tokyo",
    "beijing", "shanghai", "delhi", "mumbai", "cairo", "sydney",
    "melbourne", "toronto", "vancouver", "montreal", "chicago", "boston",
    "seattle", "dallas", "houston", "atlanta", "miami", "denver",
    "detroit", "philadelphia", "vienna", "prague", "amsterdam",
    "brussels", "dublin", "edinburgh", "lisbon", "athens", "istanbul",
    "stockholm", "oslo", "copenhagen", "helsinki", "warsaw", "budapest",
    "venice", "florence", "milan", "naples", "barcelona", "munich",
    "hamburg", "geneva", "zurich", "jerusalem", "baghdad", "tehran",
    "bangkok", "singapore", "seoul", "manila", "jakarta", "lagos",
    "nairobi", "mexico city", "los angeles", "san francisco",
    "las vegas", "new orleans", "hong kong", "rio de janeiro",
    "buenos aires", "new york city",
];
