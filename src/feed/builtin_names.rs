//! Built-in feed name table
//!
//! Maps names as they appear in the feed, after cleaning, to the canonical
//! names used throughout the calendar.

pub(crate) const BUILTIN_NAMES: &[(&str, &str)] = &[
    ("Czwartek I tygodnia Adwentu", "1 Czwartek Adwentu"),
    ("Piątek I tygodnia Adwentu", "1 Piątek Adwentu"),
    ("Poniedziałek I tygodnia Adwentu", "1 Poniedziałek Adwentu"),
    ("Sobota I tygodnia Adwentu", "1 Sobota Adwentu"),
    ("Wtorek I tygodnia Adwentu", "1 Wtorek Adwentu"),
    ("Środa I tygodnia Adwentu", "1 Środa Adwentu"),
    ("I Niedziela Adwentu", "1 Niedziela Adwentu"),
    ("Czwartek II tygodnia Adwentu", "2 Czwartek Adwentu"),
    ("Piątek II tygodnia Adwentu", "2 Piątek Adwentu"),
    ("Poniedziałek II tygodnia Adwentu", "2 Poniedziałek Adwentu"),
    ("Sobota II tygodnia Adwentu", "2 Sobota Adwentu"),
    ("Wtorek II tygodnia Adwentu", "2 Wtorek Adwentu"),
    ("Środa II tygodnia Adwentu", "2 Środa Adwentu"),
    ("II Niedziela Adwentu", "2 Niedziela Adwentu"),
    ("Czwartek III tygodnia Adwentu", "3 Czwartek Adwentu"),
    ("Piątek III tygodnia Adwentu", "3 Piątek Adwentu"),
    ("Poniedziałek III tygodnia Adwentu", "3 Poniedziałek Adwentu"),
    ("Wtorek III tygodnia Adwentu", "3 Wtorek Adwentu"),
    ("Środa III tygodnia Adwentu", "3 Środa Adwentu"),
    ("III Niedziela Adwentu", "3 Niedziela Adwentu"),
    ("IV Niedziela Adwentu", "4 Niedziela Adwentu"),
    ("Dzień adwentu (17 grudnia)", "17 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Dzień adwentu (18 grudnia)", "18 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Dzień adwentu (19 grudnia)", "19 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Dzień adwentu (20 grudnia)", "20 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Dzień adwentu (21 grudnia)", "21 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Dzień adwentu (22 grudnia)", "22 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Dzień adwentu (23 grudnia)", "23 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Dzień adwentu (24 grudnia)", "24 grudnia - Dzień powszedni w okresie Adwentu"),
    ("Św. Barnaby, Apostoła", "11 czerwca - św. Barnaby Apostoła"),
    ("Narodzenie św. Jana Chrzciciela", "24 czerwca - Uroczystość Narodzenia św. Jana Chrzciciela"),
    ("Świętych Apostołów Piotra i Pawła", "29 czerwca - Uroczystość św. Apostołów Piotra i Pawła"),
    ("Niepokalane poczęcie Najświętszej Maryi Panny", "8 grudnia - Uroczystość Niepokalanego Poczęcia NMP"),
    ("Św. Wojciecha, biskupa i męczennika", "23 kwietnia - Uroczystość św. Wojciecha, biskupa i męczennika, głównego patrona Polski"),
    ("Św. Marka, Ewangelisty", "25 kwietnia - św. Marka Ewangelisty"),
    ("Św. Katarzyny Sieneńskiej, dziewicy i doktora Kościoła", "29 kwietnia - św. Katarzyny ze Sieny, dziewicy i doktora Kościoła"),
    ("Św. Benedykta, opata", "11 lipca - św. Benedykta, patrona Europy"),
    ("Św. Marii Magdaleny", "22 lipca - Święto św. Marii Magdaleny"),
    ("Św. Brygidy, zakonnicy", "23 lipca - Święto św. Brygidy, patronki Europy"),
    ("Św. Jakuba, Apostoła", "25 lipca - św. Jakuba Apostoła"),
    ("Świętych Marty, Marii i Łazarza", "29 lipca - św. Marty"),
    ("Św. Tomasza, Apostoła", "3 lipca - św. Tomasza Apostoła"),
    ("Wszystkich Świętych", "1 listopada - Uroczystość Wszystkich Świętych"),
    ("Wspomnienie wszystkich wiernych zmarłych", "2 listopada - Wspomnienie Wszystkich Wiernych Zmarłych"),
    ("Ofiarowanie Najświętszej Maryi Panny", "21 listopada - Ofiarowanie Najświętszej Maryi Panny"),
    ("Św. Andrzeja, Apostoła", "30 listopada - św. Andrzeja Apostoła"),
    ("Rocznica poświęcenia Bazyliki Laterańskiej", "9 listopada - Rocznica poświęcenia Bazyliki Laterańskiej"),
    ("Świętych Cyryla, mnicha i Metodego, biskupa", "14 lutego - św. Cyryla i Metodego, patronów Europy"),
    ("Ofiarowanie Pańskie", "2 lutego - Ofiarowanie Pańskie"),
    ("Św. Józefa, rzemieślnika", "1 maja - św. Józefa rzemieślnika"),
    ("Św. Macieja, Apostoła", "14 maja - św. Macieja Apostoła"),
    ("Św. Andrzeja Boboli, prezbitera i męczennika", "16 maja - św. Andrzeja Boboli"),
    ("Najświętszej Maryi Panny, Królowej Polski", "3 maja - Uroczystość NMP Królowej Polski"),
    ("Świętych Apostołów Filipa i Jakuba", "6 maja - św. Apostołów Filipa i Jakuba"),
    ("Św. Stanisława, biskupa i męczennika", "8 maja - Uroczystość św. Stanisława, głównego patrona Polski"),
    ("Św. Józefa, Oblubieńca Najświętszej Maryi Panny", "19 marca - Uroczystość św. Józefa, Oblubieńca NMP"),
    ("Zwiastowanie Pańskie", "25 marca - Uroczystość Zwiastowania Pańskiego"),
    ("Św. Kazimierza", "4 marca - św. Kazimierza królewicza"),
    ("Świętych Aniołów Stróżów", "2 października - Świętych Aniołów Stróżów"),
    ("Najświętszej Maryi Panny Częstochowskiej", "26 sierpnia - Uroczystość NMP Częstochowskiej"),
    ("Świętych Apostołów Szymona i Judy Tadeusza", "28 października - św. Apostołów Szymona i Judy Tadeusza"),
    ("Męczeństwo św. Jana Chrzciciela", "29 sierpnia - Męczeństwo św. Jana Chrzciciela"),
    ("Św. Wawrzyńca, diakona i męczennika", "10 sierpnia - św. Wawrzyńca"),
    ("Św. Maksymiliana Marii Kolbego, prezbitera i męczennika", "14 sierpnia - św. Maksymiliana Marii Kolbego"),
    ("Wniebowzięcie Najświętszej Maryi Panny", "15 sierpnia - Uroczystość Wniebowzięcia NMP"),
    ("Najświętszej Maryi Panny, Królowej", "22 sierpnia - NMP Królowej Polski"),
    ("Św. Bartłomieja, Apostoła", "24 sierpnia - Święto św. Bartłomieja, Apostoła"),
    ("Przemienienie Pańskie", "6 sierpnia - Święto Przemienienia Pańskiego"),
    ("Świętych biskupów Tymoteusza i Tytusa", "26 stycznia - św. biskupów Tymoteusza i Tytusa"),
    ("Podwyższenie Krzyża Świętego", "14 września - Święto Podwyższenia Krzyża Świętego"),
    ("Najświętszej Maryi Panny Bolesnej", "15 września - NMP Bolesnej"),
    ("Św. Stanisława Kostki, zakonnika", "18 września - św. Stanisława Kostki, zakonnika, patrona Polski"),
    ("Św. Mateusza, Apostoła i Ewangelisty", "21 września - Święto św. Mateusza, Apostoła i Ewangelisty"),
    ("Świętych Archaniołów Michała, Gabriela i Rafała", "29 września - Święto św. Archaniołów Michała, Gabriela i Rafała"),
    ("Narodzenie Najświętszej Maryi Panny", "8 września - Narodzenie NMP"),
    ("Świętej Bożej Rodzicielki Maryi", "1 stycznia - Uroczystość Świętej Bożej Rodzicielki Maryi"),
    ("Chrzest Pański", "Niedziela Chrztu Pańskiego"),
    ("II Niedziela po Bożym Narodzeniu", "2 Niedziela po Narodzeniu Pańskim"),
    ("Świętych Bazylego Wielkiego i Grzegorza z Nazjanzu, biskupów i doktorów Kościoła", "2 stycznia - Dzień powszedni w Okresie Narodzenia Pańskiego"),
    ("Narodzenie Pańskie", "25 grudnia - Uroczystość Narodzenia Pańskiego"),
    ("Św. Szczepana, pierwszego męczennika", "26 grudnia - Święto św. Szczepana, pierwszego męczennika"),
    ("Świętych Młodziaków, męczenników", "28 grudnia - Święto Świętych Młodzianków, męczenników"),
    ("V dzień w oktawie Narodzenia Pańskiego", "29 grudnia - Piąty dzień w oktawie Narodzenia Pańskiego"),
    ("VI dzień w oktawie Narodzenia Pańskiego", "30 grudnia - Szósty dzień w oktawie Narodzenia Pańskiego"),
    ("VII dzień w oktawie Narodzenia Pańskiego", "31 grudnia - Siódmy dzień w oktawie Narodzenia Pańskiego"),
    ("Objawienie Pańskie", "6 stycznia - Uroczystość Objawienia Pańskiego"),
    ("Świętej Rodziny Jezusa, Maryi i Józefa", "Niedziela w oktawie Narodzenia Pańskiego - Święto Świętej Rodziny"),
    ("Czwartek w Oktawie Wielkanocy", "Czwartek w Oktawie Wielkanocy"),
    ("Niedziela Zmartwychwstania Pańskiego", "Niedziela Zmartwychwstania Pańskiego"),
    ("Piątek w Oktawie Wielkanocy", "Piątek w Oktawie Wielkanocy"),
    ("Poniedziałek w Oktawie Wielkanocy", "Poniedziałek w Oktawie Wielkanocy"),
    ("Sobota w Oktawie Wielkanocy", "Sobota w Oktawie Wielkanocy"),
    ("Wtorek w Oktawie Wielkanocy", "Wtorek w Oktawie Wielkanocy"),
    ("Środa w Oktawie Wielkanocy", "Środa w Oktawie Wielkanocy"),
    ("Czwartek II Tygodnia Wielkanocnego", "2 Czwartek Okresu Wielkanocnego"),
    ("Piątek II Tygodnia Wielkanocnego", "2 Piątek Okresu Wielkanocnego"),
    ("Poniedziałek II Tygodnia Wielkanocnego", "2 Poniedziałek Okresu Wielkanocnego"),
    ("Sobota II Tygodnia Wielkanocnego", "2 Sobota Okresu Wielkanocnego"),
    ("Wtorek II Tygodnia Wielkanocnego", "2 Wtorek Okresu Wielkanocnego"),
    ("Środa II Tygodnia Wielkanocnego", "2 Środa Okresu Wielkanocnego"),
    ("II Niedziela Wielkanocna czyli Miłosierdzia Bożego", "2 Niedziela Okresu Wielkanocnego"),
    ("Czwartek III Tygodnia Wielkanocnego", "3 Czwartek Okresu Wielkanocnego"),
    ("Piątek III Tygodnia Wielkanocnego", "3 Piątek Okresu Wielkanocnego"),
    ("Poniedziałek III Tygodnia Wielkanocnego", "3 Poniedziałek Okresu Wielkanocnego"),
    ("Sobota III Tygodnia Wielkanocnego", "3 Sobota Okresu Wielkanocnego"),
    ("Wtorek III Tygodnia Wielkanocnego", "3 Wtorek Okresu Wielkanocnego"),
    ("Środa III Tygodnia Wielkanocnego", "3 Środa Okresu Wielkanocnego"),
    ("III Niedziela Wielkanocna", "3 Niedziela Okresu Wielkanocnego"),
    ("Czwartek IV Tygodnia Wielkanocnego", "4 Czwartek Okresu Wielkanocnego"),
    ("Piątek IV Tygodnia Wielkanocnego", "4 Piątek Okresu Wielkanocnego"),
    ("Poniedziałek IV Tygodnia Wielkanocnego", "4 Poniedziałek Okresu Wielkanocnego"),
    ("Sobota IV Tygodnia Wielkanocnego", "4 Sobota Okresu Wielkanocnego"),
    ("Wtorek IV Tygodnia Wielkanocnego", "4 Wtorek Okresu Wielkanocnego"),
    ("Środa IV Tygodnia Wielkanocnego", "4 Środa Okresu Wielkanocnego"),
    ("IV Niedziela Wielkanocna", "4 Niedziela Okresu Wielkanocnego"),
    ("Czwartek V Tygodnia Wielkanocnego", "5 Czwartek Okresu Wielkanocnego"),
    ("Piątek V Tygodnia Wielkanocnego", "5 Piątek Okresu Wielkanocnego"),
    ("Poniedziałek V Tygodnia Wielkanocnego", "5 Poniedziałek Okresu Wielkanocnego"),
    ("Sobota V Tygodnia Wielkanocnego", "5 Sobota Okresu Wielkanocnego"),
    ("Wtorek V Tygodnia Wielkanocnego", "5 Wtorek Okresu Wielkanocnego"),
    ("Środa V Tygodnia Wielkanocnego", "5 Środa Okresu Wielkanocnego"),
    ("V Niedziela Wielkanocna", "5 Niedziela Okresu Wielkanocnego"),
    ("Czwartek VI Tygodnia Wielkanocnego", "6 Czwartek Okresu Wielkanocnego"),
    ("Piątek VI Tygodnia Wielkanocnego", "6 Piątek Okresu Wielkanocnego"),
    ("Poniedziałek VI Tygodnia Wielkanocnego", "6 Poniedziałek Okresu Wielkanocnego"),
    ("Sobota VI Tygodnia Wielkanocnego", "6 Sobota Okresu Wielkanocnego"),
    ("Wtorek VI Tygodnia Wielkanocnego", "6 Wtorek Okresu Wielkanocnego"),
    ("Środa VI Tygodnia Wielkanocnego", "6 Środa Okresu Wielkanocnego"),
    ("VI Niedziela Wielkanocna", "6 Niedziela Okresu Wielkanocnego"),
    ("Czwartek VII Tygodnia Wielkanocnego", "7 Czwartek Okresu Wielkanocnego"),
    ("Piątek VII Tygodnia Wielkanocnego", "7 Piątek Okresu Wielkanocnego"),
    ("Poniedziałek VII Tygodnia Wielkanocnego", "7 Poniedziałek Okresu Wielkanocnego"),
    ("Sobota VII Tygodnia Wielkanocnego", "7 Sobota Okresu Wielkanocnego"),
    ("Wtorek VII Tygodnia Wielkanocnego", "7 Wtorek Okresu Wielkanocnego"),
    ("Środa VII Tygodnia Wielkanocnego", "7 Środa Okresu Wielkanocnego"),
    ("VII Niedziela Wielkanocna", "7 Niedziela Okresu Wielkanocnego"),
    ("Wniebowstąpienie Pańskie", "Uroczystość Wniebowstąpienia Pańskiego"),
    ("Czwartek I tygodnia zwykłego", "1 Czwartek Okresu Zwykłego"),
    ("Piątek I tygodnia zwykłego", "1 Piątek Okresu Zwykłego"),
    ("Poniedziałek I tygodnia zwykłego", "1 Poniedziałek Okresu Zwykłego"),
    ("Sobota I tygodnia zwykłego", "1 Sobota Okresu Zwykłego"),
    ("Wtorek I tygodnia zwykłego", "1 Wtorek Okresu Zwykłego"),
    ("Środa I tygodnia zwykłego", "1 Środa Okresu Zwykłego"),
    ("Czwartek X tygodnia zwykłego", "10 Czwartek Okresu Zwykłego"),
    ("X Niedziela Zwykła", "10 Niedziela Okresu Zwykłego"),
    ("Piątek X tygodnia zwykłego", "10 Piątek Okresu Zwykłego"),
    ("Poniedziałek X tygodnia zwykłego", "10 Poniedziałek Okresu Zwykłego"),
    ("Sobota X tygodnia zwykłego", "10 Sobota Okresu Zwykłego"),
    ("Wtorek X tygodnia zwykłego", "10 Wtorek Okresu Zwykłego"),
    ("Środa X tygodnia zwykłego", "10 Środa Okresu Zwykłego"),
    ("Czwartek XI tygodnia zwykłego", "11 Czwartek Okresu Zwykłego"),
    ("XI Niedziela Zwykła", "11 Niedziela Okresu Zwykłego"),
    ("Piątek XI tygodnia zwykłego", "11 Piątek Okresu Zwykłego"),
    ("Poniedziałek XI tygodnia zwykłego", "11 Poniedziałek Okresu Zwykłego"),
    ("Sobota XI tygodnia zwykłego", "11 Sobota Okresu Zwykłego"),
    ("Wtorek XI tygodnia zwykłego", "11 Wtorek Okresu Zwykłego"),
    ("Środa XI tygodnia zwykłego", "11 Środa Okresu Zwykłego"),
    ("Czwartek XII tygodnia zwykłego", "12 Czwartek Okresu Zwykłego"),
    ("XII Niedziela Zwykła", "12 Niedziela Okresu Zwykłego"),
    ("Piątek XII tygodnia zwykłego", "12 Piątek Okresu Zwykłego"),
    ("Poniedziałek XII tygodnia zwykłego", "12 Poniedziałek Okresu Zwykłego"),
    ("Sobota XII tygodnia zwykłego", "12 Sobota Okresu Zwykłego"),
    ("Wtorek XII tygodnia zwykłego", "12 Wtorek Okresu Zwykłego"),
    ("Środa XII tygodnia zwykłego", "12 Środa Okresu Zwykłego"),
    ("Czwartek XIII tygodnia zwykłego", "13 Czwartek Okresu Zwykłego"),
    ("XIII Niedziela Zwykła", "13 Niedziela Okresu Zwykłego"),
    ("Piątek XIII tygodnia zwykłego", "13 Piątek Okresu Zwykłego"),
    ("Poniedziałek XIII tygodnia zwykłego", "13 Poniedziałek Okresu Zwykłego"),
    ("Sobota XIII tygodnia zwykłego", "13 Sobota Okresu Zwykłego"),
    ("Wtorek XIII tygodnia zwykłego", "13 Wtorek Okresu Zwykłego"),
    ("Środa XIII tygodnia zwykłego", "13 Środa Okresu Zwykłego"),
    ("Czwartek XIV tygodnia zwykłego", "14 Czwartek Okresu Zwykłego"),
    ("XIV Niedziela Zwykła", "14 Niedziela Okresu Zwykłego"),
    ("Piątek XIV tygodnia zwykłego", "14 Piątek Okresu Zwykłego"),
    ("Poniedziałek XIV tygodnia zwykłego", "14 Poniedziałek Okresu Zwykłego"),
    ("Sobota XIV tygodnia zwykłego", "14 Sobota Okresu Zwykłego"),
    ("Wtorek XIV tygodnia zwykłego", "14 Wtorek Okresu Zwykłego"),
    ("Środa XIV tygodnia zwykłego", "14 Środa Okresu Zwykłego"),
    ("Czwartek XV tygodnia zwykłego", "15 Czwartek Okresu Zwykłego"),
    ("XV Niedziela Zwykła", "15 Niedziela Okresu Zwykłego"),
    ("Piątek XV tygodnia zwykłego", "15 Piątek Okresu Zwykłego"),
    ("Poniedziałek XV tygodnia zwykłego", "15 Poniedziałek Okresu Zwykłego"),
    ("Sobota XV tygodnia zwykłego", "15 Sobota Okresu Zwykłego"),
    ("Wtorek XV tygodnia zwykłego", "15 Wtorek Okresu Zwykłego"),
    ("Środa XV tygodnia zwykłego", "15 Środa Okresu Zwykłego"),
    ("Czwartek XVI tygodnia zwykłego", "16 Czwartek Okresu Zwykłego"),
    ("XVI Niedziela Zwykła", "16 Niedziela Okresu Zwykłego"),
    ("Piątek XVI tygodnia zwykłego", "16 Piątek Okresu Zwykłego"),
    ("Poniedziałek XVI tygodnia zwykłego", "16 Poniedziałek Okresu Zwykłego"),
    ("Sobota XVI tygodnia zwykłego", "16 Sobota Okresu Zwykłego"),
    ("Wtorek XVI tygodnia zwykłego", "16 Wtorek Okresu Zwykłego"),
    ("Środa XVI tygodnia zwykłego", "16 Środa Okresu Zwykłego"),
    ("Czwartek XVII tygodnia zwykłego", "17 Czwartek Okresu Zwykłego"),
    ("XVII Niedziela Zwykła", "17 Niedziela Okresu Zwykłego"),
    ("Piątek XVII tygodnia zwykłego", "17 Piątek Okresu Zwykłego"),
    ("Poniedziałek XVII tygodnia zwykłego", "17 Poniedziałek Okresu Zwykłego"),
    ("Sobota XVII tygodnia zwykłego", "17 Sobota Okresu Zwykłego"),
    ("Wtorek XVII tygodnia zwykłego", "17 Wtorek Okresu Zwykłego"),
    ("Środa XVII tygodnia zwykłego", "17 Środa Okresu Zwykłego"),
    ("Czwartek XVIII tygodnia zwykłego", "18 Czwartek Okresu Zwykłego"),
    ("XVIII Niedziela Zwykła", "18 Niedziela Okresu Zwykłego"),
    ("Piątek XVIII tygodnia zwykłego", "18 Piątek Okresu Zwykłego"),
    ("Poniedziałek XVIII tygodnia zwykłego", "18 Poniedziałek Okresu Zwykłego"),
    ("Sobota XVIII tygodnia zwykłego", "18 Sobota Okresu Zwykłego"),
    ("Wtorek XVIII tygodnia zwykłego", "18 Wtorek Okresu Zwykłego"),
    ("Środa XVIII tygodnia zwykłego", "18 Środa Okresu Zwykłego"),
    ("Czwartek XIX tygodnia zwykłego", "19 Czwartek Okresu Zwykłego"),
    ("XIX Niedziela Zwykła", "19 Niedziela Okresu Zwykłego"),
    ("Piątek XIX tygodnia zwykłego", "19 Piątek Okresu Zwykłego"),
    ("Poniedziałek XIX tygodnia zwykłego", "19 Poniedziałek Okresu Zwykłego"),
    ("Sobota XIX tygodnia zwykłego", "19 Sobota Okresu Zwykłego"),
    ("Wtorek XIX tygodnia zwykłego", "19 Wtorek Okresu Zwykłego"),
    ("Środa XIX tygodnia zwykłego", "19 Środa Okresu Zwykłego"),
    ("Czwartek II tygodnia zwykłego", "2 Czwartek Okresu Zwykłego"),
    ("II Niedziela Zwykła", "2 Niedziela Okresu Zwykłego"),
    ("Piątek II tygodnia zwykłego", "2 Piątek Okresu Zwykłego"),
    ("Poniedziałek II tygodnia zwykłego", "2 Poniedziałek Okresu Zwykłego"),
    ("Sobota II tygodnia zwykłego", "2 Sobota Okresu Zwykłego"),
    ("Wtorek II tygodnia zwykłego", "2 Wtorek Okresu Zwykłego"),
    ("Środa II tygodnia zwykłego", "2 Środa Okresu Zwykłego"),
    ("Czwartek XX tygodnia zwykłego", "20 Czwartek Okresu Zwykłego"),
    ("XX Niedziela Zwykła", "20 Niedziela Okresu Zwykłego"),
    ("Piątek XX tygodnia zwykłego", "20 Piątek Okresu Zwykłego"),
    ("Poniedziałek XX tygodnia zwykłego", "20 Poniedziałek Okresu Zwykłego"),
    ("Sobota XX tygodnia zwykłego", "20 Sobota Okresu Zwykłego"),
    ("Wtorek XX tygodnia zwykłego", "20 Wtorek Okresu Zwykłego"),
    ("Środa XX tygodnia zwykłego", "20 Środa Okresu Zwykłego"),
    ("Czwartek XXI tygodnia zwykłego", "21 Czwartek Okresu Zwykłego"),
    ("XXI Niedziela Zwykła", "21 Niedziela Okresu Zwykłego"),
    ("Piątek XXI tygodnia zwykłego", "21 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXI tygodnia zwykłego", "21 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXI tygodnia zwykłego", "21 Sobota Okresu Zwykłego"),
    ("Wtorek XXI tygodnia zwykłego", "21 Wtorek Okresu Zwykłego"),
    ("Środa XXI tygodnia zwykłego", "21 Środa Okresu Zwykłego"),
    ("Czwartek XXII tygodnia zwykłego", "22 Czwartek Okresu Zwykłego"),
    ("XXII Niedziela Zwykła", "22 Niedziela Okresu Zwykłego"),
    ("Piątek XXII tygodnia zwykłego", "22 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXII tygodnia zwykłego", "22 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXII tygodnia zwykłego", "22 Sobota Okresu Zwykłego"),
    ("Wtorek XXII tygodnia zwykłego", "22 Wtorek Okresu Zwykłego"),
    ("Środa XXII tygodnia zwykłego", "22 Środa Okresu Zwykłego"),
    ("Czwartek XXIII tygodnia zwykłego", "23 Czwartek Okresu Zwykłego"),
    ("XXIII Niedziela Zwykła", "23 Niedziela Okresu Zwykłego"),
    ("Piątek XXIII tygodnia zwykłego", "23 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXIII tygodnia zwykłego", "23 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXIII tygodnia zwykłego", "23 Sobota Okresu Zwykłego"),
    ("Wtorek XXIII tygodnia zwykłego", "23 Wtorek Okresu Zwykłego"),
    ("Środa XXIII tygodnia zwykłego", "23 Środa Okresu Zwykłego"),
    ("Czwartek XXIV tygodnia zwykłego", "24 Czwartek Okresu Zwykłego"),
    ("XXIV Niedziela Zwykła", "24 Niedziela Okresu Zwykłego"),
    ("Piątek XXIV tygodnia zwykłego", "24 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXIV tygodnia zwykłego", "24 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXIV tygodnia zwykłego", "24 Sobota Okresu Zwykłego"),
    ("Wtorek XXIV tygodnia zwykłego", "24 Wtorek Okresu Zwykłego"),
    ("Środa XXIV tygodnia zwykłego", "24 Środa Okresu Zwykłego"),
    ("Czwartek XXV tygodnia zwykłego", "25 Czwartek Okresu Zwykłego"),
    ("XXV Niedziela Zwykła", "25 Niedziela Okresu Zwykłego"),
    ("Piątek XXV tygodnia zwykłego", "25 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXV tygodnia zwykłego", "25 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXV tygodnia zwykłego", "25 Sobota Okresu Zwykłego"),
    ("Wtorek XXV tygodnia zwykłego", "25 Wtorek Okresu Zwykłego"),
    ("Środa XXV tygodnia zwykłego", "25 Środa Okresu Zwykłego"),
    ("Czwartek XXVI tygodnia zwykłego", "26 Czwartek Okresu Zwykłego"),
    ("XXVI Niedziela Zwykła", "26 Niedziela Okresu Zwykłego"),
    ("Piątek XXVI tygodnia zwykłego", "26 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXVI tygodnia zwykłego", "26 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXVI tygodnia zwykłego", "26 Sobota Okresu Zwykłego"),
    ("Wtorek XXVI tygodnia zwykłego", "26 Wtorek Okresu Zwykłego"),
    ("Środa XXVI tygodnia zwykłego", "26 Środa Okresu Zwykłego"),
    ("Czwartek XXVII tygodnia zwykłego", "27 Czwartek Okresu Zwykłego"),
    ("XXVII Niedziela Zwykła", "27 Niedziela Okresu Zwykłego"),
    ("Piątek XXVII tygodnia zwykłego", "27 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXVII tygodnia zwykłego", "27 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXVII tygodnia zwykłego", "27 Sobota Okresu Zwykłego"),
    ("Wtorek XXVII tygodnia zwykłego", "27 Wtorek Okresu Zwykłego"),
    ("Środa XXVII tygodnia zwykłego", "27 Środa Okresu Zwykłego"),
    ("Czwartek XXVIII tygodnia zwykłego", "28 Czwartek Okresu Zwykłego"),
    ("XXVIII Niedziela Zwykła", "28 Niedziela Okresu Zwykłego"),
    ("Piątek XXVIII tygodnia zwykłego", "28 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXVIII tygodnia zwykłego", "28 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXVIII tygodnia zwykłego", "28 Sobota Okresu Zwykłego"),
    ("Wtorek XXVIII tygodnia zwykłego", "28 Wtorek Okresu Zwykłego"),
    ("Środa XXVIII tygodnia zwykłego", "28 Środa Okresu Zwykłego"),
    ("Czwartek XXIX tygodnia zwykłego", "29 Czwartek Okresu Zwykłego"),
    ("XXIX Niedziela Zwykła", "29 Niedziela Okresu Zwykłego"),
    ("Piątek XXIX tygodnia zwykłego", "29 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXIX tygodnia zwykłego", "29 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXIX tygodnia zwykłego", "29 Sobota Okresu Zwykłego"),
    ("Wtorek XXIX tygodnia zwykłego", "29 Wtorek Okresu Zwykłego"),
    ("Środa XXIX tygodnia zwykłego", "29 Środa Okresu Zwykłego"),
    ("Czwartek III tygodnia zwykłego", "3 Czwartek Okresu Zwykłego"),
    ("III Niedziela Zwykła", "3 Niedziela Okresu Zwykłego"),
    ("Piątek III tygodnia zwykłego", "3 Piątek Okresu Zwykłego"),
    ("Poniedziałek III tygodnia zwykłego", "3 Poniedziałek Okresu Zwykłego"),
    ("Sobota III tygodnia zwykłego", "3 Sobota Okresu Zwykłego"),
    ("Wtorek III tygodnia zwykłego", "3 Wtorek Okresu Zwykłego"),
    ("Środa III tygodnia zwykłego", "3 Środa Okresu Zwykłego"),
    ("Czwartek XXX tygodnia zwykłego", "30 Czwartek Okresu Zwykłego"),
    ("XXX Niedziela Zwykła", "30 Niedziela Okresu Zwykłego"),
    ("Piątek XXX tygodnia zwykłego", "30 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXX tygodnia zwykłego", "30 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXX tygodnia zwykłego", "30 Sobota Okresu Zwykłego"),
    ("Wtorek XXX tygodnia zwykłego", "30 Wtorek Okresu Zwykłego"),
    ("Środa XXX tygodnia zwykłego", "30 Środa Okresu Zwykłego"),
    ("Czwartek XXXI tygodnia zwykłego", "31 Czwartek Okresu Zwykłego"),
    ("XXXI Niedziela Zwykła", "31 Niedziela Okresu Zwykłego"),
    ("Piątek XXXI tygodnia zwykłego", "31 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXXI tygodnia zwykłego", "31 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXXI tygodnia zwykłego", "31 Sobota Okresu Zwykłego"),
    ("Wtorek XXXI tygodnia zwykłego", "31 Wtorek Okresu Zwykłego"),
    ("Środa XXXI tygodnia zwykłego", "31 Środa Okresu Zwykłego"),
    ("Czwartek XXXII tygodnia zwykłego", "32 Czwartek Okresu Zwykłego"),
    ("XXXII Niedziela Zwykła", "32 Niedziela Okresu Zwykłego"),
    ("Piątek XXXII tygodnia zwykłego", "32 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXXII tygodnia zwykłego", "32 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXXII tygodnia zwykłego", "32 Sobota Okresu Zwykłego"),
    ("Wtorek XXXII tygodnia zwykłego", "32 Wtorek Okresu Zwykłego"),
    ("Środa XXXII tygodnia zwykłego", "32 Środa Okresu Zwykłego"),
    ("Czwartek XXXIII tygodnia zwykłego", "33 Czwartek Okresu Zwykłego"),
    ("XXXIII Niedziela Zwykła", "33 Niedziela Okresu Zwykłego"),
    ("Piątek XXXIII tygodnia zwykłego", "33 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXXIII tygodnia zwykłego", "33 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXXIII tygodnia zwykłego", "33 Sobota Okresu Zwykłego"),
    ("Wtorek XXXIII tygodnia zwykłego", "33 Wtorek Okresu Zwykłego"),
    ("Środa XXXIII tygodnia zwykłego", "33 Środa Okresu Zwykłego"),
    ("Czwartek XXXIV tygodnia zwykłego", "34 Czwartek Okresu Zwykłego"),
    ("Piątek XXXIV tygodnia zwykłego", "34 Piątek Okresu Zwykłego"),
    ("Poniedziałek XXXIV tygodnia zwykłego", "34 Poniedziałek Okresu Zwykłego"),
    ("Sobota XXXIV tygodnia zwykłego", "34 Sobota Okresu Zwykłego"),
    ("Wtorek XXXIV tygodnia zwykłego", "34 Wtorek Okresu Zwykłego"),
    ("Środa XXXIV tygodnia zwykłego", "34 Środa Okresu Zwykłego"),
    ("Jezusa Chrystusa, Króla Wszechświata", "Uroczystość Jezusa Chrystusa, Króla Wszechświata"),
    ("Czwartek IV tygodnia zwykłego", "4 Czwartek Okresu Zwykłego"),
    ("IV Niedziela Zwykła", "4 Niedziela Okresu Zwykłego"),
    ("Piątek IV tygodnia zwykłego", "4 Piątek Okresu Zwykłego"),
    ("Poniedziałek IV tygodnia zwykłego", "4 Poniedziałek Okresu Zwykłego"),
    ("Sobota IV tygodnia zwykłego", "4 Sobota Okresu Zwykłego"),
    ("Wtorek IV tygodnia zwykłego", "4 Wtorek Okresu Zwykłego"),
    ("Środa IV tygodnia zwykłego", "4 Środa Okresu Zwykłego"),
    ("Czwartek V tygodnia zwykłego", "5 Czwartek Okresu Zwykłego"),
    ("V Niedziela Zwykła", "5 Niedziela Okresu Zwykłego"),
    ("Piątek V tygodnia zwykłego", "5 Piątek Okresu Zwykłego"),
    ("Poniedziałek V tygodnia zwykłego", "5 Poniedziałek Okresu Zwykłego"),
    ("Sobota V tygodnia zwykłego", "5 Sobota Okresu Zwykłego"),
    ("Wtorek V tygodnia zwykłego", "5 Wtorek Okresu Zwykłego"),
    ("Środa V tygodnia zwykłego", "5 Środa Okresu Zwykłego"),
    ("Czwartek VI tygodnia zwykłego", "6 Czwartek Okresu Zwykłego"),
    ("VI Niedziela Zwykła", "6 Niedziela Okresu Zwykłego"),
    ("Piątek VI tygodnia zwykłego", "6 Piątek Okresu Zwykłego"),
    ("Poniedziałek VI tygodnia zwykłego", "6 Poniedziałek Okresu Zwykłego"),
    ("Sobota VI tygodnia zwykłego", "6 Sobota Okresu Zwykłego"),
    ("Wtorek VI tygodnia zwykłego", "6 Wtorek Okresu Zwykłego"),
    ("Środa VI tygodnia zwykłego", "6 Środa Okresu Zwykłego"),
    ("Czwartek VII tygodnia zwykłego", "7 Czwartek Okresu Zwykłego"),
    ("VII Niedziela Zwykła", "7 Niedziela Okresu Zwykłego"),
    ("Piątek VII tygodnia zwykłego", "7 Piątek Okresu Zwykłego"),
    ("Poniedziałek VII tygodnia zwykłego", "7 Poniedziałek Okresu Zwykłego"),
    ("Sobota VII tygodnia zwykłego", "7 Sobota Okresu Zwykłego"),
    ("Wtorek VII tygodnia zwykłego", "7 Wtorek Okresu Zwykłego"),
    ("Środa VII tygodnia zwykłego", "7 Środa Okresu Zwykłego"),
    ("Czwartek VIII tygodnia zwykłego", "8 Czwartek Okresu Zwykłego"),
    ("VIII Niedziela Zwykła", "8 Niedziela Okresu Zwykłego"),
    ("Piątek VIII tygodnia zwykłego", "8 Piątek Okresu Zwykłego"),
    ("Poniedziałek VIII tygodnia zwykłego", "8 Poniedziałek Okresu Zwykłego"),
    ("Sobota VIII tygodnia zwykłego", "8 Sobota Okresu Zwykłego"),
    ("Wtorek VIII tygodnia zwykłego", "8 Wtorek Okresu Zwykłego"),
    ("Środa VIII tygodnia zwykłego", "8 Środa Okresu Zwykłego"),
    ("Czwartek IX tygodnia zwykłego", "9 Czwartek Okresu Zwykłego"),
    ("IX Niedziela Zwykła", "9 Niedziela Okresu Zwykłego"),
    ("Piątek IX tygodnia zwykłego", "9 Piątek Okresu Zwykłego"),
    ("Poniedziałek IX tygodnia zwykłego", "9 Poniedziałek Okresu Zwykłego"),
    ("Sobota IX tygodnia zwykłego", "9 Sobota Okresu Zwykłego"),
    ("Wtorek IX tygodnia zwykłego", "9 Wtorek Okresu Zwykłego"),
    ("Środa IX tygodnia zwykłego", "9 Środa Okresu Zwykłego"),
    ("Wielki Czwartek: Wieczerzy Pańskiej", "Wielki Czwartek"),
    ("Wielki Piątek: Męki Pańskiej", "Wielki Piątek Męki Pańskiej"),
    ("Wielka Sobota", "Wigilia Paschalna"),
    ("Czwartek I tygodnia Wielkiego Postu", "1 Czwartek Wielkiego Postu"),
    ("Piątek I tygodnia Wielkiego Postu", "1 Piątek Wielkiego Postu"),
    ("Poniedziałek I tygodnia Wielkiego Postu", "1 Poniedziałek Wielkiego Postu"),
    ("Sobota I tygodnia Wielkiego Postu", "1 Sobota Wielkiego Postu"),
    ("Wtorek I tygodnia Wielkiego Postu", "1 Wtorek Wielkiego Postu"),
    ("Środa I tygodnia Wielkiego Postu", "1 Środa Wielkiego Postu"),
    ("I Niedziela Wielkiego Postu", "1 Niedziela Wielkiego Postu"),
    ("Czwartek II tygodnia Wielkiego Postu", "2 Czwartek Wielkiego Postu"),
    ("Piątek II tygodnia Wielkiego Postu", "2 Piątek Wielkiego Postu"),
    ("Poniedziałek II tygodnia Wielkiego Postu", "2 Poniedziałek Wielkiego Postu"),
    ("Sobota II tygodnia Wielkiego Postu", "2 Sobota Wielkiego Postu"),
    ("Wtorek II tygodnia Wielkiego Postu", "2 Wtorek Wielkiego Postu"),
    ("Środa II tygodnia Wielkiego Postu", "2 Środa Wielkiego Postu"),
    ("II Niedziela Wielkiego Postu", "2 Niedziela Wielkiego Postu"),
    ("Czwartek III tygodnia Wielkiego Postu", "3 Czwartek Wielkiego Postu"),
    ("Piątek III tygodnia Wielkiego Postu", "3 Piątek Wielkiego Postu"),
    ("Poniedziałek III tygodnia Wielkiego Postu", "3 Poniedziałek Wielkiego Postu"),
    ("Sobota III tygodnia Wielkiego Postu", "3 Sobota Wielkiego Postu"),
    ("Wtorek III tygodnia Wielkiego Postu", "3 Wtorek Wielkiego Postu"),
    ("Środa III tygodnia Wielkiego Postu", "3 Środa Wielkiego Postu"),
    ("III Niedziela Wielkiego Postu", "3 Niedziela Wielkiego Postu"),
    ("Środa IV tygodnia Wielkiego Postu", "4 Środa Wielkiego Postu"),
    ("Piątek IV tygodnia Wielkiego Postu", "4 Piątek Wielkiego Postu"),
    ("Poniedziałek IV tygodnia Wielkiego Postu", "4 Poniedziałek Wielkiego Postu"),
    ("Sobota IV tygodnia Wielkiego Postu", "4 Sobota Wielkiego Postu"),
    ("Wtorek IV tygodnia Wielkiego Postu", "4 Wtorek Wielkiego Postu"),
    ("IV Niedziela Wielkiego Postu „Laetare”", "4 Niedziela Wielkiego Postu"),
    ("Czwartek V tygodnia Wielkiego Postu", "5 Czwartek Wielkiego Postu"),
    ("Piątek V tygodnia Wielkiego Postu", "5 Piątek Wielkiego Postu"),
    ("Poniedziałek V tygodnia Wielkiego Postu", "5 Poniedziałek Wielkiego Postu"),
    ("Sobota V tygodnia Wielkiego Postu", "5 Sobota Wielkiego Postu"),
    ("Wtorek V tygodnia Wielkiego Postu", "5 Wtorek Wielkiego Postu"),
    ("Środa V tygodnia Wielkiego Postu", "5 Środa Wielkiego Postu"),
    ("V Niedziela Wielkiego Postu", "5 Niedziela Wielkiego Postu"),
    ("Wielka Środa", "Wielka Środa"),
    ("Wielki Poniedziałek", "Wielki Poniedziałek"),
    ("Wielki Wtorek", "Wielki Wtorek"),
    ("Niedziela Palmowa Męki Pańskiej", "Niedziela Palmowa Męki Pańskiej"),
    ("Czwartek po Popielcu", "Czwartek po Popielcu"),
    ("Piątek po Popielcu", "Piątek po Popielcu"),
    ("Sobota po Popielcu", "Sobota po Popielcu"),
    ("Środa Popielcowa", "Środa Popielcowa"),
    ("Niepokalanego Serca Najświętszej Maryi Panny", "Wspomnienie Niepokalanego Serca NMP"),
    ("Najświętszej Maryi Panny, Matki Kościoła", "Wspomnienie NMP Matki Kościoła"),
    ("Najświętszego Ciała i Krwi Chrystusa", "Uroczystość Najświętszego Ciała i Krwi Chrystusa"),
    ("Najświętszego Serca Pana Jezusa", "Uroczystość Najświętszego Serca Pana Jezusa"),
    ("Najświętszej Trójcy", "Uroczystość Najświętszej Trójcy"),
    ("Niedziela Zesłania Ducha Świętego", "Uroczystość Zesłania Ducha Świętego"),
    ("Jezusa Chrystusa, Najwyższego i Wiecznego Kapłana", "Święto Jezusa Chrystusa, Najwyższego i Wiecznego Kapłana"),
];
