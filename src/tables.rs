//! Compiled-in vocabularies for the categorical columns.
//!
//! Each entry is `(ident, keywords)`. The ident becomes the enumerator
//! suffix in the generated table and is itself a valid spelling; keywords
//! list the other spellings seen in the facility data.

use crate::resolve::Category;

type Entries = &'static [(&'static str, &'static [&'static str])];

pub(crate) fn entries(category: Category) -> Entries {
    match category {
        Category::Affiliate => AFFILIATES,
        Category::State => US_STATES,
        Category::Market => NIELSEN_DMAS,
    }
}

const AFFILIATES: Entries = &[
    ("ABC", &["ABC Television Network", "ABC Network"]),
    ("CBS", &["CBS Television Network", "CBS Network"]),
    ("NBC", &["NBC Television Network", "NBC Network"]),
    ("FOX", &["Fox Broadcasting", "Fox Network", "Fox Broadcasting Company"]),
    ("PBS", &["Public Broadcasting Service", "PBS Member"]),
    ("CW", &["The CW", "CW Network", "The CW Network", "CW Plus"]),
    ("MyNetworkTV", &["MNTV", "MNT", "My Network TV", "MyTV"]),
    ("ION", &["ION Television", "ION Media", "ION TV"]),
    ("Telemundo", &["Telemundo Network"]),
    ("Univision", &["Univision Network"]),
    ("UniMas", &["Uni Mas", "UniMás"]),
    ("Estrella", &["Estrella TV", "EstrellaTV"]),
    ("Azteca", &["Azteca America"]),
    ("TBN", &["Trinity Broadcasting Network", "Trinity Broadcasting"]),
    ("Daystar", &["Daystar Television"]),
    ("MeTV", &["Me TV", "Memorable Entertainment Television"]),
    ("AntennaTV", &["Antenna TV"]),
    ("ThisTV", &["This TV"]),
    ("Bounce", &["Bounce TV"]),
    ("Cozi", &["Cozi TV"]),
    ("Grit", &["Grit TV"]),
    ("Heroes", &["Heroes & Icons", "H&I"]),
    ("Court", &["Court TV"]),
    ("Independent", &["IND", "Indep", "None"]),
];

const US_STATES: Entries = &[
    ("AL", &["Alabama"]),
    ("AK", &["Alaska"]),
    ("AZ", &["Arizona"]),
    ("AR", &["Arkansas"]),
    ("CA", &["California"]),
    ("CO", &["Colorado"]),
    ("CT", &["Connecticut"]),
    ("DE", &["Delaware"]),
    ("DC", &["District of Columbia", "Washington DC"]),
    ("FL", &["Florida"]),
    ("GA", &["Georgia"]),
    ("HI", &["Hawaii"]),
    ("ID", &["Idaho"]),
    ("IL", &["Illinois"]),
    ("IN", &["Indiana"]),
    ("IA", &["Iowa"]),
    ("KS", &["Kansas"]),
    ("KY", &["Kentucky"]),
    ("LA", &["Louisiana"]),
    ("ME", &["Maine"]),
    ("MD", &["Maryland"]),
    ("MA", &["Massachusetts"]),
    ("MI", &["Michigan"]),
    ("MN", &["Minnesota"]),
    ("MS", &["Mississippi"]),
    ("MO", &["Missouri"]),
    ("MT", &["Montana"]),
    ("NE", &["Nebraska"]),
    ("NV", &["Nevada"]),
    ("NH", &["New Hampshire"]),
    ("NJ", &["New Jersey"]),
    ("NM", &["New Mexico"]),
    ("NY", &["New York"]),
    ("NC", &["North Carolina"]),
    ("ND", &["North Dakota"]),
    ("OH", &["Ohio"]),
    ("OK", &["Oklahoma"]),
    ("OR", &["Oregon"]),
    ("PA", &["Pennsylvania"]),
    ("RI", &["Rhode Island"]),
    ("SC", &["South Carolina"]),
    ("SD", &["South Dakota"]),
    ("TN", &["Tennessee"]),
    ("TX", &["Texas"]),
    ("UT", &["Utah"]),
    ("VT", &["Vermont"]),
    ("VA", &["Virginia"]),
    ("WA", &["Washington"]),
    ("WV", &["West Virginia"]),
    ("WI", &["Wisconsin"]),
    ("WY", &["Wyoming"]),
    ("PR", &["Puerto Rico"]),
    ("VI", &["Virgin Islands", "US Virgin Islands"]),
    ("GU", &["Guam"]),
    ("AS", &["American Samoa"]),
    ("MP", &["Northern Mariana Islands"]),
];

const NIELSEN_DMAS: Entries = &[
    ("NewYork", &["New York", "New York, NY"]),
    ("LosAngeles", &["Los Angeles", "Los Angeles, CA"]),
    ("Chicago", &["Chicago", "Chicago, IL"]),
    ("Philadelphia", &["Philadelphia", "Philadelphia, PA"]),
    ("DallasFtWorth", &["Dallas-Ft. Worth", "Dallas-Fort Worth"]),
    ("SanFrancisco", &["San Francisco-Oak-San Jose", "San Francisco-Oakland-San Jose"]),
    ("Washington", &["Washington, DC (Hagrstwn)", "Washington, DC (Hagerstown)"]),
    ("Houston", &["Houston", "Houston, TX"]),
    ("Boston", &["Boston (Manchester)", "Boston"]),
    ("Atlanta", &["Atlanta", "Atlanta, GA"]),
    ("Tampa", &["Tampa-St. Pete (Sarasota)", "Tampa-St. Petersburg (Sarasota)"]),
    ("Phoenix", &["Phoenix (Prescott)", "Phoenix"]),
    ("Seattle", &["Seattle-Tacoma"]),
    ("Detroit", &["Detroit", "Detroit, MI"]),
    ("Minneapolis", &["Minneapolis-St. Paul"]),
    ("Miami", &["Miami-Ft. Lauderdale", "Miami-Fort Lauderdale"]),
    ("Denver", &["Denver", "Denver, CO"]),
    ("Orlando", &["Orlando-Daytona Bch-Melbrn", "Orlando-Daytona Beach-Melbourne"]),
    ("Cleveland", &["Cleveland-Akron (Canton)"]),
    ("Sacramento", &["Sacramnto-Stkton-Modesto", "Sacramento-Stockton-Modesto"]),
    ("Charlotte", &["Charlotte", "Charlotte, NC"]),
    ("Portland", &["Portland, OR"]),
    ("Raleigh", &["Raleigh-Durham (Fayetvlle)", "Raleigh-Durham (Fayetteville)"]),
    ("StLouis", &["St. Louis", "Saint Louis"]),
    ("Indianapolis", &["Indianapolis"]),
    ("Pittsburgh", &["Pittsburgh"]),
    ("Nashville", &["Nashville"]),
    ("Baltimore", &["Baltimore"]),
    ("SaltLakeCity", &["Salt Lake City"]),
    ("SanDiego", &["San Diego"]),
    ("SanAntonio", &["San Antonio"]),
    ("Hartford", &["Hartford & New Haven", "Hartford-New Haven"]),
    ("KansasCity", &["Kansas City"]),
    ("Columbus", &["Columbus, OH"]),
    ("Austin", &["Austin"]),
    ("Milwaukee", &["Milwaukee"]),
    ("Cincinnati", &["Cincinnati"]),
    ("Greenville", &["Greenvll-Spart-Ashevll-And", "Greenville-Spartanburg-Asheville-Anderson"]),
    ("WestPalmBeach", &["West Palm Beach-Ft. Pierce"]),
    ("LasVegas", &["Las Vegas"]),
    ("Jacksonville", &["Jacksonville"]),
    ("OklahomaCity", &["Oklahoma City"]),
    ("GrandRapids", &["Grand Rapids-Kalmzoo-B.Crk", "Grand Rapids-Kalamazoo-Battle Creek"]),
    ("Albuquerque", &["Albuquerque-Santa Fe"]),
    ("Norfolk", &["Norfolk-Portsmth-Newpt Nws", "Norfolk-Portsmouth-Newport News"]),
    ("Birmingham", &["Birmingham (Ann and Tusc)", "Birmingham (Anniston and Tuscaloosa)"]),
    ("Greensboro", &["Greensboro-H.Point-W.Salem", "Greensboro-High Point-Winston Salem"]),
    ("Memphis", &["Memphis"]),
    ("Louisville", &["Louisville"]),
    ("NewOrleans", &["New Orleans"]),
    ("Buffalo", &["Buffalo"]),
    ("Providence", &["Providence-New Bedford"]),
    ("Richmond", &["Richmond-Petersburg"]),
    ("Fresno", &["Fresno-Visalia"]),
    ("Honolulu", &["Honolulu"]),
    ("Anchorage", &["Anchorage"]),
];
