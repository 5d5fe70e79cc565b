//! Curated fallback catalog, used when live aggregation underperforms.
//!
//! Mood-indexed shortlists (mixed Bollywood/Hollywood, at least 8 entries
//! each) plus a small general pool. Pure data; the only logic is composing
//! the per-mood picks with general-pool top-up.

use std::collections::HashSet;

use crate::models::{Mood, MovieRecord};

/// Upper bound on the composed fallback shortlist
const MAX_FALLBACK_PICKS: usize = 12;

fn movie(
    id: &str,
    title: &str,
    overview: &str,
    rating: f64,
    poster_path: &str,
    year: &str,
) -> MovieRecord {
    MovieRecord {
        id: Some(id.to_string()),
        title: title.to_string(),
        overview: overview.to_string(),
        rating,
        poster_url: Some(format!("https://image.tmdb.org/t/p/w500{}", poster_path)),
        release_date: year.to_string(),
    }
}

/// Curated shortlist for one mood
pub fn mood_list(mood: Mood) -> Vec<MovieRecord> {
    match mood {
        Mood::Happy => vec![
            movie("f_h_1", "3 Idiots", "A comedy-drama about friendship and following your dreams.", 8.4, "/66A9MqXOyVp71a6tB3k1apLNj8S.jpg", "2009"),
            movie("f_h_2", "The Hangover", "A comedy about a bachelor party gone wrong in Las Vegas.", 7.7, "/4qM1o4XZfVzPhKxW0a4t8qH5z8J.jpg", "2009"),
            movie("f_h_3", "Munna Bhai M.B.B.S.", "A gangster enrolls in medical college to fulfill his father's dream.", 8.1, "/jQG3t2Z2YEl5GQY2QdYwz0S2w3f.jpg", "2003"),
            movie("f_h_4", "Zindagi Na Milegi Dobara", "Three friends take a road trip that changes their lives.", 8.0, "/ao0nC0mZ4FcKqJsteVEh9UpAJZK.jpg", "2011"),
            movie("f_h_5", "PK", "An alien on Earth loses his communication device and explores humanity.", 8.0, "/k1QUCjNAkfRpWfm1dVJGUmVHzGv.jpg", "2014"),
            movie("f_h_6", "Superbad", "Two friends try to enjoy their last weeks of high school.", 7.6, "/ek8e8txUyUwd2BNqj6lFEerJfbq.jpg", "2007"),
            movie("f_h_7", "Hera Pheri", "Three men get caught up in a kidnapping gone wrong.", 8.1, "/8oNbyz1Cdm42Hcps225y7sY9qsK.jpg", "2000"),
            movie("f_h_8", "Jumanji: Welcome to the Jungle", "Teens get sucked into a video game adventure.", 6.9, "/bXrZ5iHBEjH7WMidbUDQ0U2xbmr.jpg", "2017"),
        ],
        Mood::Sad => vec![
            movie("f_s_1", "Taare Zameen Par", "A dyslexic child's life changes when he meets an art teacher.", 8.1, "/2aEoG9V7H5PHeTtNQ2rYZRk5vK1.jpg", "2007"),
            movie("f_s_2", "The Pursuit of Happyness", "A struggling salesman takes custody of his son.", 8.0, "/bO9WFb7GZ7YzWxZmf0RduCMsZV3.jpg", "2006"),
            movie("f_s_3", "Kal Ho Naa Ho", "A man teaches a woman how to love and live.", 7.8, "/2Yx2oyS9MhUlCT3VkOITkkpZRlm.jpg", "2003"),
            movie("f_s_4", "Grave of the Fireflies", "Siblings struggle to survive in wartime Japan.", 8.5, "/4u1vptE8aXuzwNqp1S3z3bWQp6y.jpg", "1988"),
            movie("f_s_5", "Masaan", "Four lives intersect along the Ganges.", 8.0, "/9zA3RDeo63HgNbUsVTNff7kwh28.jpg", "2015"),
            movie("f_s_6", "A Beautiful Mind", "A brilliant mathematician battles schizophrenia.", 8.2, "/zwzWCmH72OSC9NA0ipoqw5Zjya8.jpg", "2001"),
            movie("f_s_7", "Barfi!", "A deaf and mute man navigates love and life.", 7.4, "/a9YVh1SeDsICoZ6irMIXja2fJG0.jpg", "2012"),
            movie("f_s_8", "Manchester by the Sea", "A janitor returns to his hometown after a tragedy.", 7.7, "/xt7xQCFaN7G42xvAfoyz1K77QSq.jpg", "2016"),
        ],
        Mood::Romantic => vec![
            movie("f_r_1", "Kuch Kuch Hota Hai", "Friendship turns into love across years.", 7.5, "/nC6YewsGmmKzBSSMSmc5QwDFi1C.jpg", "1998"),
            movie("f_r_2", "The Notebook", "A summer romance that lasts a lifetime.", 7.8, "/rNzQyW4f8B8cQeg6XyC1XtnG9Sh.jpg", "2004"),
            movie("f_r_3", "Yeh Jawaani Hai Deewani", "Friends, travel and love.", 7.2, "/2mW7UZ5EKeosFVJeGb3PcTJS3BM.jpg", "2013"),
            movie("f_r_4", "Before Sunrise", "Two strangers meet on a train and wander Vienna.", 8.1, "/9B39S2hY6G4qzM7gc3KJ2YMBX1A.jpg", "1995"),
            movie("f_r_5", "Tamasha", "A man struggles between societal expectations and passion.", 7.2, "/gIMiAFDzy83H8XTur2qxGn8pYt8.jpg", "2015"),
            movie("f_r_6", "La La Land", "Love and ambition in Los Angeles.", 8.0, "/uDO8zWDhfWwoFdKS4fzkUJt0Rf0.jpg", "2016"),
            movie("f_r_7", "Dil Bechara", "A poignant love story inspired by TFiOS.", 7.6, "/h0rXWmWZKD0wC2WkP3cu6Uytzsz.jpg", "2020"),
            movie("f_r_8", "Notting Hill", "A bookseller falls for a film star.", 7.3, "/6u1fYtxG5eqjhtCPDx04pJphQRW.jpg", "1999"),
        ],
        Mood::Excited => vec![
            movie("f_e_1", "Dhoom 3", "High-octane heists and chases.", 6.8, "/8JQZ2rCA0nVddOZXS6jttuPAHy9.jpg", "2013"),
            movie("f_e_2", "Mission: Impossible - Fallout", "Ethan Hunt and team prevent global catastrophe.", 7.7, "/AkJQpZp9WoNdj7pLYSj1L0RcMMN.jpg", "2018"),
            movie("f_e_3", "War", "An elite soldier hunts his rogue mentor.", 6.5, "/pV3Hn6Nq35p3xNmPR9U1FVLtZLk.jpg", "2019"),
            movie("f_e_4", "Mad Max: Fury Road", "Post-apocalyptic chase saga.", 8.1, "/8tZYtuWezp8JbcsvHYO0O46tFbo.jpg", "2015"),
            movie("f_e_5", "Pathaan", "An Indian spy embarks on a dangerous mission.", 6.6, "/ayrG9q24apqYh6g82kTFogyXv3E.jpg", "2023"),
            movie("f_e_6", "John Wick", "A retired hitman seeks vengeance.", 7.4, "/fZPSd91yGE9fCcCe6OoQr6E3Bev.jpg", "2014"),
            movie("f_e_7", "RRR", "Two legendary revolutionaries forge a bond.", 7.8, "/6WExLObz0SqGZQhQ0imeISFRCGD.jpg", "2022"),
            movie("f_e_8", "The Dark Knight", "Batman faces the Joker.", 9.0, "/qJ2tW6WMUDux911r6m7haRef0WH.jpg", "2008"),
        ],
        Mood::Angry => vec![
            movie("f_a_1", "John Wick", "A retired hitman seeks vengeance.", 7.4, "/fZPSd91yGE9fCcCe6OoQr6E3Bev.jpg", "2014"),
            movie("f_a_2", "Mad Max: Fury Road", "Post-apocalyptic chase saga.", 8.1, "/8tZYtuWezp8JbcsvHYO0O46tFbo.jpg", "2015"),
            movie("f_a_3", "Kaithi", "An ex-convict gets caught up in a night-long chase.", 8.3, "/9dI2wAPOQg8nH9n1tFoZT3zhEXI.jpg", "2019"),
            movie("f_a_4", "Baby", "An elite Indian counter-intelligence unit hunts terrorists.", 7.8, "/vQ8G2GNJUgIVbawn94Qh1gC7YpN.jpg", "2015"),
            movie("f_a_5", "The Dark Knight", "Batman faces the Joker.", 9.0, "/qJ2tW6WMUDux911r6m7haRef0WH.jpg", "2008"),
            movie("f_a_6", "Extraction", "A black ops mercenary embarks on a deadly mission in Dhaka.", 6.8, "/wlfDxbGEsW58vGhFljKkcR5IxDj.jpg", "2020"),
            movie("f_a_7", "Pathaan", "An Indian spy embarks on a dangerous mission.", 6.6, "/ayrG9q24apqYh6g82kTFogyXv3E.jpg", "2023"),
            movie("f_a_8", "War", "An elite soldier hunts his rogue mentor.", 6.5, "/pV3Hn6Nq35p3xNmPR9U1FVLtZLk.jpg", "2019"),
        ],
        Mood::Relaxed => vec![
            movie("f_rl_1", "The Secret Life of Walter Mitty", "A daydreamer embarks on a global journey.", 7.2, "/tw1r3qYi58E8CUpbZQhQ0imeOqM.jpg", "2013"),
            movie("f_rl_2", "Life of Pi", "A young man survives a disaster at sea on a lifeboat with a tiger.", 7.9, "/3bD5Qn7qSdz8CA0nVddOZXS6jtV.jpg", "2012"),
            movie("f_rl_3", "Midnight in Paris", "A writer discovers midnight transports him to the 1920s.", 7.6, "/4wBG5kbfagTQclETblPRRGihk0I.jpg", "2011"),
            movie("f_rl_4", "The Lunchbox", "A mistaken delivery connects a young housewife and an older man.", 7.8, "/3hFQm3GEXLMaLLq5yRvCNrI6Vsg.jpg", "2013"),
            movie("f_rl_5", "Amélie", "A whimsical depiction of contemporary Parisian life.", 8.3, "/sWGaQbY4Z1cdq9VHtV6nRvWmvMR.jpg", "2001"),
            movie("f_rl_6", "October", "A tender coming-of-age story set in Delhi.", 7.2, "/yZK0YvZCENKz7dxyzKDn5XxhxLq.jpg", "2018"),
            movie("f_rl_7", "Chef", "A chef starts a food truck to reclaim his creativity.", 7.3, "/zfZ7dUnc8mZKVEtKiMyVZbYbK9F.jpg", "2014"),
            movie("f_rl_8", "The Hundred-Foot Journey", "An Indian family opens a restaurant in France.", 7.3, "/bQHIiph0QGlpK1iD7agEXKDkQ5Y.jpg", "2014"),
        ],
        Mood::Bored => vec![
            movie("f_b_1", "Shutter Island", "A marshal investigates a disappearance on an island hospital.", 8.2, "/kve20tXwUZpu4GUX8l6X7Z4jmL6.jpg", "2010"),
            movie("f_b_2", "Kahaani", "A pregnant woman searches for her missing husband in Kolkata.", 7.9, "/oK8GMDIS9KuX3sI5Yucs5cjox96.jpg", "2012"),
            movie("f_b_3", "Andhadhun", "A blind pianist is swept up in a murder mystery.", 8.1, "/67ZdZXXAuv5Z7xL7sRKqzZo4PM5.jpg", "2018"),
            movie("f_b_4", "Drishyam", "A father goes to great lengths to protect his family.", 8.1, "/8eQof8I4eAbOeXtfLOcAfeUOLuO.jpg", "2013"),
            movie("f_b_5", "Tenet", "A secret agent manipulates time to prevent World War III.", 7.3, "/k68nPLbIST6NP96JmTxmZijEvCA.jpg", "2020"),
            movie("f_b_6", "Detective Byomkesh Bakshy!", "A young detective probes a sinister conspiracy in 1940s Calcutta.", 7.5, "/9k2YkdEYY5EYXPLkZX31lrT7xYu.jpg", "2015"),
            movie("f_b_7", "Arrival", "A linguist communicates with extraterrestrials.", 7.9, "/x2FJsf1ElAgr63Y3PNPtJrcmpoe.jpg", "2016"),
            movie("f_b_8", "Talaash", "A cop investigates a high-profile death.", 7.2, "/2VtW7UZ5EKeosFVJeGb3PcTJX5r.jpg", "2012"),
        ],
        Mood::Scared => vec![
            movie("f_sc_1", "The Conjuring", "Paranormal investigators help a family terrorized by a dark presence.", 7.5, "/wVYREutTvI2tmxr6ujrHT704wGF.jpg", "2013"),
            movie("f_sc_2", "Tumbbad", "A mythological horror set in colonial India.", 8.2, "/nPGZ1YgnPZXoqBYwygJyI07212e.jpg", "2018"),
            movie("f_sc_3", "Stree", "A small town is haunted by a spirit.", 7.4, "/8Lx7x1YgnM7hZ9E9QnUnxEporX2.jpg", "2018"),
            movie("f_sc_4", "Hereditary", "A family unravels terrifying secrets after their matriarch dies.", 7.3, "/bcT8CaBIj086WVD7K529h78eujb.jpg", "2018"),
            movie("f_sc_5", "The Ring", "A cursed videotape kills viewers in seven days.", 7.1, "/e2t5CKXQwZ0pniNXh9vDOMkMt2g.jpg", "2002"),
            movie("f_sc_6", "Bhoot", "A couple's life turns nightmarish in a haunted apartment.", 6.3, "/f9G4mJcP0xK3opYJwcYqKqRR3YK.jpg", "2003"),
            movie("f_sc_7", "Train to Busan", "Passengers fight to survive on a zombie-infested train.", 7.6, "/2oRRTPNtozgPhOa9CYZiVl4GRQ5.jpg", "2016"),
            movie("f_sc_8", "The Nun", "A priest and novice uncover unholy secrets.", 5.8, "/sFC1ElvoKGdHJIWRpNB3xWJ9lJA.jpg", "2018"),
        ],
        Mood::Nostalgic => vec![
            movie("f_n_1", "Lagaan", "Villagers challenge British officers to a cricket match.", 8.1, "/ucW5Z7WvyaManIeZDV4SSQdlqz7.jpg", "2001"),
            movie("f_n_2", "Swades", "An NRI returns to India and rediscovers home.", 8.2, "/y6VAk0nnBYnCTsRmR271GGBqBPd.jpg", "2004"),
            movie("f_n_3", "Anand", "A terminally ill man spreads joy.", 8.1, "/1ZJYG1ChB7sCv0xOsyjzAm8h1Hc.jpg", "1971"),
            movie("f_n_4", "Sholay", "Two criminals are hired to capture a ruthless bandit.", 8.2, "/j1zAr72Xd23LSeX776BF3nf6tDr.jpg", "1975"),
            movie("f_n_5", "Hum Aapke Hain Koun..!", "A family drama about love and relationships.", 7.5, "/6NKxaz2YsmiVjCwXTkA8azhbugi.jpg", "1994"),
            movie("f_n_6", "Guide", "A tour guide falls in love and seeks redemption.", 8.1, "/7wY2Gj33jjXNMTvEihQ6VbUaz2Q.jpg", "1965"),
            movie("f_n_7", "The Sound of Music", "A governess brings music to a family in Austria.", 8.0, "/qgM1b9DLG3sZ3VAb9YSEuxsjjXN.jpg", "1965"),
            movie("f_n_8", "Forrest Gump", "A man witnesses historic events with simple wisdom.", 8.8, "/saHP97rTPS5eLmrLQEcANmKrsFl.jpg", "1994"),
        ],
        Mood::Adventurous => vec![
            movie("f_adv_1", "Pirates of the Caribbean: The Curse of the Black Pearl", "A blacksmith teams up with a pirate to save his love.", 8.0, "/1Jw2GNbKwxLBzME2YkdBqtu1o9Y.jpg", "2003"),
            movie("f_adv_2", "Indiana Jones and the Last Crusade", "Indiana searches for the Holy Grail.", 8.2, "/4p1N2Qrt8j0H8xMHMHvtRxv9weZ.jpg", "1989"),
            movie("f_adv_3", "Baahubali 2: The Conclusion", "Mahendra Baahubali avenges his father.", 7.9, "/3GZbE2wAPO8nH9n1tFoZT3zhEXI.jpg", "2017"),
            movie("f_adv_4", "Krrish", "An Indian superhero discovers his powers.", 6.8, "/7pGdb9h9NP7VDaRao7IhiHBpjz2.jpg", "2006"),
            movie("f_adv_5", "The Jungle Book", "Mowgli returns to the jungle in this live-action adaptation.", 7.4, "/vOipe2myi26UDwP978hsYOrnUWC.jpg", "2016"),
            movie("f_adv_6", "Guardians of the Galaxy", "A group of intergalactic criminals must save the universe.", 7.9, "/y31QB9kn3XSudA15tV7UWQ9XLuW.jpg", "2014"),
            movie("f_adv_7", "Jumanji: Welcome to the Jungle", "Teens get sucked into a video game adventure.", 6.9, "/bXrZ5iHBEjH7WMidbUDQ0U2xbmr.jpg", "2017"),
            movie("f_adv_8", "The Revenant", "A frontiersman fights for survival in the wilderness.", 8.0, "/oXUWEc5i3wYyFnL1Ycu8ppxxPvs.jpg", "2015"),
        ],
    }
}

/// Mood-agnostic pool used to top up short mood lists
pub fn general_pool() -> Vec<MovieRecord> {
    vec![
        movie("g_1", "Inception", "A thief steals corporate secrets through dream-sharing.", 8.8, "/edv5CZvWj09upOsy2Y6IwDhK8bt.jpg", "2010"),
        movie("g_2", "Dangal", "A father trains his daughters to become wrestlers.", 8.3, "/p2lVAcPuRPSO8Al6hDDGw0OgMi8.jpg", "2016"),
        movie("g_3", "Andhadhun", "A blind pianist is swept up in a murder mystery.", 8.1, "/67ZdZXXAuv5Z7xL7sRKqzZo4PM5.jpg", "2018"),
        movie("g_4", "Interstellar", "Explorers travel through a wormhole in space.", 8.6, "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg", "2014"),
        movie("g_5", "Drishyam", "A father does whatever it takes to protect his family.", 8.1, "/8eQof8I4eAbOeXtfLOcAfeUOLuO.jpg", "2013"),
    ]
}

/// Composed fallback shortlist for a mood: curated list first, general
/// pool to top up, deduplicated, capped at 12.
pub fn fallback_movies(mood: Mood) -> Vec<MovieRecord> {
    let mut picks = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for record in mood_list(mood).into_iter().chain(general_pool()) {
        if picks.len() >= MAX_FALLBACK_PICKS {
            break;
        }
        if let Some(key) = record.dedup_key() {
            if seen.insert(key) {
                picks.push(record);
            }
        }
    }

    picks
}
