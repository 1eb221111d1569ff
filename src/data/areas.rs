use crate::models::{Area, AreaScores};

#[allow(clippy::too_many_arguments)]
fn area(
    id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    scores: [u8; 5],
    population: u32,
    mayor: &str,
    lifestyle: &str,
    fun_fact: &str,
) -> Area {
    Area {
        id: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        scores: AreaScores {
            hospitals: scores[0],
            schools: scores[1],
            parks: scores[2],
            safety: scores[3],
            community_centers: scores[4],
        },
        population,
        mayor: mayor.to_string(),
        lifestyle: lifestyle.to_string(),
        fun_fact: fun_fact.to_string(),
    }
}

/// The built-in candidate catalog.
///
/// Scores are [hospitals, schools, parks, safety, community centers] on the
/// 1-10 scale. Order matters: it is the tie-break order for equal match
/// scores and the fallback order for unset preferences.
pub(super) fn builtin_areas() -> Vec<Area> {
    vec![
        area(
            "1",
            "Greenfield Heights",
            40.7128,
            -74.006,
            [4, 9, 10, 9, 5],
            45_000,
            "Sarah Mitchell",
            "Family-friendly suburb with excellent outdoor recreation and top-rated schools",
            "Home to the oldest oak tree in the state, planted in 1789",
        ),
        area(
            "2",
            "Metro Central",
            40.7589,
            -73.9851,
            [10, 5, 3, 5, 9],
            120_000,
            "James Rodriguez",
            "Vibrant urban center with world-class healthcare and cultural amenities",
            "The first electric streetcar in America operated here in 1887",
        ),
        area(
            "3",
            "Lakeside Village",
            40.6892,
            -74.0445,
            [3, 6, 8, 10, 4],
            28_000,
            "Emily Chen",
            "Peaceful lakefront community known for exceptional safety and tranquility",
            "Featured in three Hollywood films as the 'ideal American town'",
        ),
        area(
            "4",
            "Riverside Park District",
            40.7831,
            -73.9712,
            [5, 10, 7, 6, 4],
            55_000,
            "Michael Thompson",
            "Education-focused neighborhood with award-winning schools and academic programs",
            "Produced 5 Nobel laureates from its high school alumni",
        ),
        area(
            "5",
            "Sunset Hills",
            40.7282,
            -73.7949,
            [6, 4, 5, 7, 10],
            38_000,
            "Patricia Williams",
            "Active community with extensive recreational programs and vibrant social scene",
            "Hosts the largest annual community fair in the tri-state area",
        ),
        area(
            "6",
            "Harbor Point",
            40.6501,
            -73.9496,
            [9, 4, 4, 4, 7],
            82_000,
            "Robert Kim",
            "Historic waterfront district with excellent medical facilities and dining",
            "Once the busiest shipping port on the Eastern seaboard in the 1800s",
        ),
        area(
            "7",
            "Oak Valley",
            40.7614,
            -73.8443,
            [3, 5, 10, 9, 3],
            22_000,
            "Jennifer Davis",
            "Nature-lover's paradise with extensive trails and serene environment",
            "Contains a protected forest where a species of butterfly was first discovered",
        ),
        area(
            "8",
            "Innovation District",
            40.7484,
            -73.9967,
            [7, 8, 2, 6, 8],
            95_000,
            "David Park",
            "Tech hub with cutting-edge facilities, great schools, and startup culture",
            "More patents per capita are filed here than anywhere else in the country",
        ),
        area(
            "9",
            "Meadowbrook",
            40.6782,
            -73.9442,
            [6, 7, 8, 7, 6],
            42_000,
            "Lisa Anderson",
            "Balanced community with good access to all amenities and green spaces",
            "Named after the wild meadows that still bloom every spring in the central park",
        ),
        area(
            "10",
            "Heritage Square",
            40.7359,
            -73.9911,
            [8, 3, 4, 5, 10],
            68_000,
            "Thomas Brown",
            "Cultural center with top hospitals, museums, and strong community engagement",
            "The town square has hosted public gatherings continuously since 1776",
        ),
        area(
            "11",
            "Pinecrest",
            40.8012,
            -73.9234,
            [2, 8, 9, 10, 5],
            19_000,
            "Amanda Foster",
            "Quiet residential area perfect for families seeking top safety and good schools",
            "Has the lowest crime rate in the entire metropolitan region for 15 consecutive years",
        ),
        area(
            "12",
            "Downtown Core",
            40.7527,
            -73.9772,
            [10, 6, 2, 4, 9],
            150_000,
            "Marcus Lee",
            "Fast-paced urban living with immediate access to premier hospitals and nightlife",
            "The first skyscraper in the region was built here in 1902",
        ),
        area(
            "13",
            "Willowdale",
            40.6654,
            -73.8897,
            [5, 10, 6, 8, 4],
            31_000,
            "Catherine Moore",
            "Education-centric community where families prioritize academic excellence",
            "97% of high school graduates attend four-year universities",
        ),
        area(
            "14",
            "Cedar Springs",
            40.7198,
            -74.0342,
            [4, 5, 10, 8, 7],
            25_000,
            "Daniel Wright",
            "Outdoor enthusiast community with abundant parks and recreational trails",
            "Home to a natural hot spring that locals have used for over 200 years",
        ),
        area(
            "15",
            "Northgate",
            40.8234,
            -73.9501,
            [9, 7, 5, 6, 8],
            72_000,
            "Rachel Green",
            "Well-connected neighborhood with excellent healthcare and strong community ties",
            "The historic north gate to the original colonial settlement still stands today",
        ),
        area(
            "16",
            "Bayview Terrace",
            40.6423,
            -74.0178,
            [6, 4, 7, 9, 5],
            33_000,
            "Steven Clark",
            "Scenic coastal community with beautiful views and family-friendly atmosphere",
            "Dolphins can be spotted from the shore during summer months",
        ),
        area(
            "17",
            "University Heights",
            40.7456,
            -73.8623,
            [7, 9, 4, 5, 8],
            48_000,
            "Julia Martinez",
            "Academic atmosphere with cafes, bookstores, and intellectual community",
            "Three major universities have campuses within walking distance",
        ),
        area(
            "18",
            "Silverbrook",
            40.6987,
            -73.9123,
            [5, 6, 6, 10, 6],
            27_000,
            "Andrew Taylor",
            "Safe, quiet neighborhood ideal for those seeking peace of mind",
            "Named after the silver-colored brook that runs through the town center",
        ),
        area(
            "19",
            "Arts District",
            40.7312,
            -74.0089,
            [4, 5, 5, 4, 10],
            56_000,
            "Olivia Bennett",
            "Creative hub with galleries, theaters, and a thriving arts community",
            "More artists per capita live here than any other neighborhood in the country",
        ),
        area(
            "20",
            "Maplewood Gardens",
            40.7789,
            -73.8789,
            [6, 8, 9, 8, 6],
            35_000,
            "Christopher Adams",
            "Charming tree-lined streets with excellent schools and abundant green space",
            "Every street is named after a different tree species native to the region",
        ),
    ]
}
