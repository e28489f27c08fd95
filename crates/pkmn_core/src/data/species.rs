use crate::stat::BaseStats;

use super::SpeciesInfo;

#[rustfmt::skip]
pub static SPECIES: [SpeciesInfo; 151] = [
    SpeciesInfo { id: 1, name: "Bulbasaur", base: BaseStats { hp: 45, atk: 49, def: 49, spd: 45, satk: 65, sdef: 65 } },
    SpeciesInfo { id: 2, name: "Ivysaur", base: BaseStats { hp: 60, atk: 62, def: 63, spd: 60, satk: 80, sdef: 80 } },
    SpeciesInfo { id: 3, name: "Venusaur", base: BaseStats { hp: 80, atk: 82, def: 83, spd: 80, satk: 100, sdef: 100 } },
    SpeciesInfo { id: 4, name: "Charmander", base: BaseStats { hp: 39, atk: 52, def: 43, spd: 65, satk: 60, sdef: 50 } },
    SpeciesInfo { id: 5, name: "Charmeleon", base: BaseStats { hp: 58, atk: 64, def: 58, spd: 80, satk: 80, sdef: 65 } },
    SpeciesInfo { id: 6, name: "Charizard", base: BaseStats { hp: 78, atk: 84, def: 78, spd: 100, satk: 109, sdef: 85 } },
    SpeciesInfo { id: 7, name: "Squirtle", base: BaseStats { hp: 44, atk: 48, def: 65, spd: 43, satk: 50, sdef: 64 } },
    SpeciesInfo { id: 8, name: "Wartortle", base: BaseStats { hp: 59, atk: 63, def: 80, spd: 58, satk: 65, sdef: 80 } },
    SpeciesInfo { id: 9, name: "Blastoise", base: BaseStats { hp: 79, atk: 83, def: 100, spd: 78, satk: 85, sdef: 105 } },
    SpeciesInfo { id: 10, name: "Caterpie", base: BaseStats { hp: 45, atk: 30, def: 35, spd: 45, satk: 20, sdef: 20 } },
    SpeciesInfo { id: 11, name: "Metapod", base: BaseStats { hp: 50, atk: 20, def: 55, spd: 30, satk: 25, sdef: 25 } },
    SpeciesInfo { id: 12, name: "Butterfree", base: BaseStats { hp: 60, atk: 45, def: 50, spd: 70, satk: 80, sdef: 80 } },
    SpeciesInfo { id: 13, name: "Weedle", base: BaseStats { hp: 40, atk: 35, def: 30, spd: 50, satk: 20, sdef: 20 } },
    SpeciesInfo { id: 14, name: "Kakuna", base: BaseStats { hp: 45, atk: 25, def: 50, spd: 35, satk: 25, sdef: 25 } },
    SpeciesInfo { id: 15, name: "Beedrill", base: BaseStats { hp: 65, atk: 80, def: 40, spd: 75, satk: 45, sdef: 80 } },
    SpeciesInfo { id: 16, name: "Pidgey", base: BaseStats { hp: 40, atk: 45, def: 40, spd: 56, satk: 35, sdef: 35 } },
    SpeciesInfo { id: 17, name: "Pidgeotto", base: BaseStats { hp: 63, atk: 60, def: 55, spd: 71, satk: 50, sdef: 50 } },
    SpeciesInfo { id: 18, name: "Pidgeot", base: BaseStats { hp: 83, atk: 80, def: 75, spd: 91, satk: 70, sdef: 70 } },
    SpeciesInfo { id: 19, name: "Rattata", base: BaseStats { hp: 30, atk: 56, def: 35, spd: 72, satk: 25, sdef: 35 } },
    SpeciesInfo { id: 20, name: "Raticate", base: BaseStats { hp: 55, atk: 81, def: 60, spd: 97, satk: 50, sdef: 70 } },
    SpeciesInfo { id: 21, name: "Spearow", base: BaseStats { hp: 40, atk: 60, def: 30, spd: 70, satk: 31, sdef: 31 } },
    SpeciesInfo { id: 22, name: "Fearow", base: BaseStats { hp: 65, atk: 90, def: 65, spd: 100, satk: 61, sdef: 61 } },
    SpeciesInfo { id: 23, name: "Ekans", base: BaseStats { hp: 35, atk: 60, def: 44, spd: 55, satk: 40, sdef: 54 } },
    SpeciesInfo { id: 24, name: "Arbok", base: BaseStats { hp: 60, atk: 85, def: 69, spd: 80, satk: 65, sdef: 79 } },
    SpeciesInfo { id: 25, name: "Pikachu", base: BaseStats { hp: 35, atk: 55, def: 30, spd: 90, satk: 50, sdef: 40 } },
    SpeciesInfo { id: 26, name: "Raichu", base: BaseStats { hp: 60, atk: 90, def: 55, spd: 100, satk: 90, sdef: 80 } },
    SpeciesInfo { id: 27, name: "Sandshrew", base: BaseStats { hp: 50, atk: 75, def: 85, spd: 40, satk: 20, sdef: 30 } },
    SpeciesInfo { id: 28, name: "Sandslash", base: BaseStats { hp: 75, atk: 100, def: 110, spd: 65, satk: 45, sdef: 55 } },
    SpeciesInfo { id: 29, name: "Nidoran♀", base: BaseStats { hp: 55, atk: 47, def: 52, spd: 41, satk: 40, sdef: 40 } },
    SpeciesInfo { id: 30, name: "Nidorina", base: BaseStats { hp: 70, atk: 62, def: 67, spd: 56, satk: 55, sdef: 55 } },
    SpeciesInfo { id: 31, name: "Nidoqueen", base: BaseStats { hp: 90, atk: 82, def: 87, spd: 76, satk: 75, sdef: 85 } },
    SpeciesInfo { id: 32, name: "Nidoran♂", base: BaseStats { hp: 46, atk: 57, def: 40, spd: 50, satk: 40, sdef: 40 } },
    SpeciesInfo { id: 33, name: "Nidorino", base: BaseStats { hp: 61, atk: 72, def: 57, spd: 65, satk: 55, sdef: 55 } },
    SpeciesInfo { id: 34, name: "Nidoking", base: BaseStats { hp: 81, atk: 92, def: 77, spd: 85, satk: 85, sdef: 75 } },
    SpeciesInfo { id: 35, name: "Clefairy", base: BaseStats { hp: 70, atk: 45, def: 48, spd: 35, satk: 60, sdef: 65 } },
    SpeciesInfo { id: 36, name: "Clefable", base: BaseStats { hp: 95, atk: 70, def: 73, spd: 60, satk: 85, sdef: 90 } },
    SpeciesInfo { id: 37, name: "Vulpix", base: BaseStats { hp: 38, atk: 41, def: 40, spd: 65, satk: 50, sdef: 65 } },
    SpeciesInfo { id: 38, name: "Ninetales", base: BaseStats { hp: 73, atk: 76, def: 75, spd: 100, satk: 81, sdef: 100 } },
    SpeciesInfo { id: 39, name: "Jigglypuff", base: BaseStats { hp: 115, atk: 45, def: 20, spd: 20, satk: 45, sdef: 25 } },
    SpeciesInfo { id: 40, name: "Wigglytuff", base: BaseStats { hp: 140, atk: 70, def: 45, spd: 45, satk: 75, sdef: 50 } },
    SpeciesInfo { id: 41, name: "Zubat", base: BaseStats { hp: 40, atk: 45, def: 35, spd: 55, satk: 30, sdef: 40 } },
    SpeciesInfo { id: 42, name: "Golbat", base: BaseStats { hp: 75, atk: 80, def: 70, spd: 90, satk: 65, sdef: 75 } },
    SpeciesInfo { id: 43, name: "Oddish", base: BaseStats { hp: 45, atk: 50, def: 55, spd: 30, satk: 75, sdef: 65 } },
    SpeciesInfo { id: 44, name: "Gloom", base: BaseStats { hp: 60, atk: 65, def: 70, spd: 40, satk: 85, sdef: 75 } },
    SpeciesInfo { id: 45, name: "Vileplume", base: BaseStats { hp: 75, atk: 80, def: 85, spd: 50, satk: 100, sdef: 90 } },
    SpeciesInfo { id: 46, name: "Paras", base: BaseStats { hp: 35, atk: 70, def: 55, spd: 25, satk: 45, sdef: 55 } },
    SpeciesInfo { id: 47, name: "Parasect", base: BaseStats { hp: 60, atk: 95, def: 80, spd: 30, satk: 60, sdef: 80 } },
    SpeciesInfo { id: 48, name: "Venonat", base: BaseStats { hp: 60, atk: 55, def: 50, spd: 45, satk: 40, sdef: 55 } },
    SpeciesInfo { id: 49, name: "Venomoth", base: BaseStats { hp: 70, atk: 65, def: 60, spd: 90, satk: 90, sdef: 75 } },
    SpeciesInfo { id: 50, name: "Diglett", base: BaseStats { hp: 10, atk: 55, def: 25, spd: 95, satk: 35, sdef: 45 } },
    SpeciesInfo { id: 51, name: "Dugtrio", base: BaseStats { hp: 35, atk: 80, def: 50, spd: 120, satk: 50, sdef: 70 } },
    SpeciesInfo { id: 52, name: "Meowth", base: BaseStats { hp: 40, atk: 45, def: 35, spd: 90, satk: 40, sdef: 40 } },
    SpeciesInfo { id: 53, name: "Persian", base: BaseStats { hp: 65, atk: 70, def: 60, spd: 115, satk: 65, sdef: 65 } },
    SpeciesInfo { id: 54, name: "Psyduck", base: BaseStats { hp: 50, atk: 52, def: 48, spd: 55, satk: 65, sdef: 50 } },
    SpeciesInfo { id: 55, name: "Golduck", base: BaseStats { hp: 80, atk: 82, def: 78, spd: 85, satk: 95, sdef: 80 } },
    SpeciesInfo { id: 56, name: "Mankey", base: BaseStats { hp: 40, atk: 80, def: 35, spd: 70, satk: 35, sdef: 45 } },
    SpeciesInfo { id: 57, name: "Primeape", base: BaseStats { hp: 65, atk: 105, def: 60, spd: 95, satk: 60, sdef: 70 } },
    SpeciesInfo { id: 58, name: "Growlithe", base: BaseStats { hp: 55, atk: 70, def: 45, spd: 60, satk: 70, sdef: 50 } },
    SpeciesInfo { id: 59, name: "Arcanine", base: BaseStats { hp: 90, atk: 110, def: 80, spd: 95, satk: 100, sdef: 80 } },
    SpeciesInfo { id: 60, name: "Poliwag", base: BaseStats { hp: 40, atk: 50, def: 40, spd: 90, satk: 40, sdef: 40 } },
    SpeciesInfo { id: 61, name: "Poliwhirl", base: BaseStats { hp: 65, atk: 65, def: 65, spd: 90, satk: 50, sdef: 50 } },
    SpeciesInfo { id: 62, name: "Poliwrath", base: BaseStats { hp: 90, atk: 85, def: 95, spd: 70, satk: 70, sdef: 90 } },
    SpeciesInfo { id: 63, name: "Abra", base: BaseStats { hp: 25, atk: 20, def: 15, spd: 90, satk: 105, sdef: 55 } },
    SpeciesInfo { id: 64, name: "Kadabra", base: BaseStats { hp: 40, atk: 35, def: 30, spd: 105, satk: 120, sdef: 70 } },
    SpeciesInfo { id: 65, name: "Alakazam", base: BaseStats { hp: 55, atk: 50, def: 45, spd: 120, satk: 135, sdef: 85 } },
    SpeciesInfo { id: 66, name: "Machop", base: BaseStats { hp: 70, atk: 80, def: 50, spd: 35, satk: 35, sdef: 35 } },
    SpeciesInfo { id: 67, name: "Machoke", base: BaseStats { hp: 80, atk: 100, def: 70, spd: 45, satk: 50, sdef: 60 } },
    SpeciesInfo { id: 68, name: "Machamp", base: BaseStats { hp: 90, atk: 130, def: 80, spd: 55, satk: 65, sdef: 85 } },
    SpeciesInfo { id: 69, name: "Bellsprout", base: BaseStats { hp: 50, atk: 75, def: 35, spd: 40, satk: 70, sdef: 30 } },
    SpeciesInfo { id: 70, name: "Weepinbell", base: BaseStats { hp: 65, atk: 90, def: 50, spd: 55, satk: 85, sdef: 45 } },
    SpeciesInfo { id: 71, name: "Victreebel", base: BaseStats { hp: 80, atk: 105, def: 65, spd: 70, satk: 100, sdef: 60 } },
    SpeciesInfo { id: 72, name: "Tentacool", base: BaseStats { hp: 40, atk: 40, def: 35, spd: 70, satk: 50, sdef: 100 } },
    SpeciesInfo { id: 73, name: "Tentacruel", base: BaseStats { hp: 80, atk: 70, def: 65, spd: 100, satk: 80, sdef: 120 } },
    SpeciesInfo { id: 74, name: "Geodude", base: BaseStats { hp: 40, atk: 80, def: 100, spd: 20, satk: 30, sdef: 30 } },
    SpeciesInfo { id: 75, name: "Graveler", base: BaseStats { hp: 55, atk: 95, def: 115, spd: 35, satk: 45, sdef: 45 } },
    SpeciesInfo { id: 76, name: "Golem", base: BaseStats { hp: 80, atk: 110, def: 130, spd: 45, satk: 55, sdef: 65 } },
    SpeciesInfo { id: 77, name: "Ponyta", base: BaseStats { hp: 50, atk: 85, def: 55, spd: 90, satk: 65, sdef: 65 } },
    SpeciesInfo { id: 78, name: "Rapidash", base: BaseStats { hp: 65, atk: 100, def: 70, spd: 105, satk: 80, sdef: 80 } },
    SpeciesInfo { id: 79, name: "Slowpoke", base: BaseStats { hp: 90, atk: 65, def: 65, spd: 15, satk: 40, sdef: 40 } },
    SpeciesInfo { id: 80, name: "Slowbro", base: BaseStats { hp: 95, atk: 75, def: 110, spd: 30, satk: 100, sdef: 80 } },
    SpeciesInfo { id: 81, name: "Magnemite", base: BaseStats { hp: 25, atk: 35, def: 70, spd: 45, satk: 95, sdef: 55 } },
    SpeciesInfo { id: 82, name: "Magneton", base: BaseStats { hp: 50, atk: 60, def: 95, spd: 70, satk: 120, sdef: 70 } },
    SpeciesInfo { id: 83, name: "Farfetch’d", base: BaseStats { hp: 52, atk: 65, def: 55, spd: 60, satk: 58, sdef: 62 } },
    SpeciesInfo { id: 84, name: "Doduo", base: BaseStats { hp: 35, atk: 85, def: 45, spd: 75, satk: 35, sdef: 35 } },
    SpeciesInfo { id: 85, name: "Dodrio", base: BaseStats { hp: 60, atk: 110, def: 70, spd: 100, satk: 60, sdef: 60 } },
    SpeciesInfo { id: 86, name: "Seel", base: BaseStats { hp: 65, atk: 45, def: 55, spd: 45, satk: 45, sdef: 70 } },
    SpeciesInfo { id: 87, name: "Dewgong", base: BaseStats { hp: 90, atk: 70, def: 80, spd: 70, satk: 70, sdef: 95 } },
    SpeciesInfo { id: 88, name: "Grimer", base: BaseStats { hp: 80, atk: 80, def: 50, spd: 25, satk: 40, sdef: 50 } },
    SpeciesInfo { id: 89, name: "Muk", base: BaseStats { hp: 105, atk: 105, def: 75, spd: 50, satk: 65, sdef: 100 } },
    SpeciesInfo { id: 90, name: "Shellder", base: BaseStats { hp: 30, atk: 65, def: 100, spd: 40, satk: 45, sdef: 25 } },
    SpeciesInfo { id: 91, name: "Cloyster", base: BaseStats { hp: 50, atk: 95, def: 180, spd: 70, satk: 85, sdef: 45 } },
    SpeciesInfo { id: 92, name: "Gastly", base: BaseStats { hp: 30, atk: 35, def: 30, spd: 80, satk: 100, sdef: 35 } },
    SpeciesInfo { id: 93, name: "Haunter", base: BaseStats { hp: 45, atk: 50, def: 45, spd: 95, satk: 115, sdef: 55 } },
    SpeciesInfo { id: 94, name: "Gengar", base: BaseStats { hp: 60, atk: 65, def: 60, spd: 110, satk: 130, sdef: 75 } },
    SpeciesInfo { id: 95, name: "Onix", base: BaseStats { hp: 35, atk: 45, def: 160, spd: 70, satk: 30, sdef: 45 } },
    SpeciesInfo { id: 96, name: "Drowzee", base: BaseStats { hp: 60, atk: 48, def: 45, spd: 42, satk: 43, sdef: 90 } },
    SpeciesInfo { id: 97, name: "Hypno", base: BaseStats { hp: 85, atk: 73, def: 70, spd: 67, satk: 73, sdef: 115 } },
    SpeciesInfo { id: 98, name: "Krabby", base: BaseStats { hp: 30, atk: 105, def: 90, spd: 50, satk: 25, sdef: 25 } },
    SpeciesInfo { id: 99, name: "Kingler", base: BaseStats { hp: 55, atk: 130, def: 115, spd: 75, satk: 50, sdef: 50 } },
    SpeciesInfo { id: 100, name: "Voltorb", base: BaseStats { hp: 40, atk: 30, def: 50, spd: 100, satk: 55, sdef: 55 } },
    SpeciesInfo { id: 101, name: "Electrode", base: BaseStats { hp: 60, atk: 50, def: 70, spd: 140, satk: 80, sdef: 80 } },
    SpeciesInfo { id: 102, name: "Exeggcute", base: BaseStats { hp: 60, atk: 40, def: 80, spd: 40, satk: 60, sdef: 45 } },
    SpeciesInfo { id: 103, name: "Exeggutor", base: BaseStats { hp: 95, atk: 95, def: 85, spd: 55, satk: 125, sdef: 65 } },
    SpeciesInfo { id: 104, name: "Cubone", base: BaseStats { hp: 50, atk: 50, def: 95, spd: 35, satk: 40, sdef: 50 } },
    SpeciesInfo { id: 105, name: "Marowak", base: BaseStats { hp: 60, atk: 80, def: 110, spd: 45, satk: 50, sdef: 80 } },
    SpeciesInfo { id: 106, name: "Hitmonlee", base: BaseStats { hp: 50, atk: 120, def: 53, spd: 87, satk: 35, sdef: 110 } },
    SpeciesInfo { id: 107, name: "Hitmonchan", base: BaseStats { hp: 50, atk: 105, def: 79, spd: 76, satk: 35, sdef: 110 } },
    SpeciesInfo { id: 108, name: "Lickitung", base: BaseStats { hp: 90, atk: 55, def: 75, spd: 30, satk: 60, sdef: 75 } },
    SpeciesInfo { id: 109, name: "Koffing", base: BaseStats { hp: 40, atk: 65, def: 95, spd: 35, satk: 60, sdef: 45 } },
    SpeciesInfo { id: 110, name: "Weezing", base: BaseStats { hp: 65, atk: 90, def: 120, spd: 60, satk: 85, sdef: 70 } },
    SpeciesInfo { id: 111, name: "Rhyhorn", base: BaseStats { hp: 80, atk: 85, def: 95, spd: 25, satk: 30, sdef: 30 } },
    SpeciesInfo { id: 112, name: "Rhydon", base: BaseStats { hp: 105, atk: 130, def: 120, spd: 40, satk: 45, sdef: 45 } },
    SpeciesInfo { id: 113, name: "Chansey", base: BaseStats { hp: 250, atk: 5, def: 5, spd: 50, satk: 35, sdef: 105 } },
    SpeciesInfo { id: 114, name: "Tangela", base: BaseStats { hp: 65, atk: 55, def: 115, spd: 60, satk: 100, sdef: 40 } },
    SpeciesInfo { id: 115, name: "Kangaskhan", base: BaseStats { hp: 105, atk: 95, def: 80, spd: 90, satk: 40, sdef: 80 } },
    SpeciesInfo { id: 116, name: "Horsea", base: BaseStats { hp: 30, atk: 40, def: 70, spd: 60, satk: 70, sdef: 25 } },
    SpeciesInfo { id: 117, name: "Seadra", base: BaseStats { hp: 55, atk: 65, def: 95, spd: 85, satk: 95, sdef: 45 } },
    SpeciesInfo { id: 118, name: "Goldeen", base: BaseStats { hp: 45, atk: 67, def: 60, spd: 63, satk: 35, sdef: 50 } },
    SpeciesInfo { id: 119, name: "Seaking", base: BaseStats { hp: 80, atk: 92, def: 65, spd: 68, satk: 65, sdef: 80 } },
    SpeciesInfo { id: 120, name: "Staryu", base: BaseStats { hp: 30, atk: 45, def: 55, spd: 85, satk: 70, sdef: 55 } },
    SpeciesInfo { id: 121, name: "Starmie", base: BaseStats { hp: 60, atk: 75, def: 85, spd: 115, satk: 100, sdef: 85 } },
    SpeciesInfo { id: 122, name: "Mr. Mime", base: BaseStats { hp: 40, atk: 45, def: 65, spd: 90, satk: 100, sdef: 120 } },
    SpeciesInfo { id: 123, name: "Scyther", base: BaseStats { hp: 70, atk: 110, def: 80, spd: 105, satk: 55, sdef: 80 } },
    SpeciesInfo { id: 124, name: "Jynx", base: BaseStats { hp: 65, atk: 50, def: 35, spd: 95, satk: 115, sdef: 95 } },
    SpeciesInfo { id: 125, name: "Electabuzz", base: BaseStats { hp: 65, atk: 83, def: 57, spd: 105, satk: 95, sdef: 85 } },
    SpeciesInfo { id: 126, name: "Magmar", base: BaseStats { hp: 65, atk: 95, def: 57, spd: 93, satk: 100, sdef: 85 } },
    SpeciesInfo { id: 127, name: "Pinsir", base: BaseStats { hp: 65, atk: 125, def: 100, spd: 85, satk: 55, sdef: 70 } },
    SpeciesInfo { id: 128, name: "Tauros", base: BaseStats { hp: 75, atk: 100, def: 95, spd: 110, satk: 40, sdef: 70 } },
    SpeciesInfo { id: 129, name: "Magikarp", base: BaseStats { hp: 20, atk: 10, def: 55, spd: 80, satk: 15, sdef: 20 } },
    SpeciesInfo { id: 130, name: "Gyarados", base: BaseStats { hp: 95, atk: 125, def: 79, spd: 81, satk: 60, sdef: 100 } },
    SpeciesInfo { id: 131, name: "Lapras", base: BaseStats { hp: 130, atk: 85, def: 80, spd: 60, satk: 85, sdef: 95 } },
    SpeciesInfo { id: 132, name: "Ditto", base: BaseStats { hp: 48, atk: 48, def: 48, spd: 48, satk: 48, sdef: 48 } },
    SpeciesInfo { id: 133, name: "Eevee", base: BaseStats { hp: 55, atk: 55, def: 50, spd: 55, satk: 45, sdef: 65 } },
    SpeciesInfo { id: 134, name: "Vaporeon", base: BaseStats { hp: 130, atk: 65, def: 60, spd: 65, satk: 110, sdef: 95 } },
    SpeciesInfo { id: 135, name: "Jolteon", base: BaseStats { hp: 65, atk: 65, def: 60, spd: 130, satk: 110, sdef: 95 } },
    SpeciesInfo { id: 136, name: "Flareon", base: BaseStats { hp: 65, atk: 130, def: 60, spd: 65, satk: 95, sdef: 110 } },
    SpeciesInfo { id: 137, name: "Porygon", base: BaseStats { hp: 65, atk: 60, def: 70, spd: 40, satk: 85, sdef: 75 } },
    SpeciesInfo { id: 138, name: "Omanyte", base: BaseStats { hp: 35, atk: 40, def: 100, spd: 35, satk: 90, sdef: 55 } },
    SpeciesInfo { id: 139, name: "Omastar", base: BaseStats { hp: 70, atk: 60, def: 125, spd: 55, satk: 115, sdef: 70 } },
    SpeciesInfo { id: 140, name: "Kabuto", base: BaseStats { hp: 30, atk: 80, def: 90, spd: 55, satk: 55, sdef: 45 } },
    SpeciesInfo { id: 141, name: "Kabutops", base: BaseStats { hp: 60, atk: 115, def: 105, spd: 80, satk: 65, sdef: 70 } },
    SpeciesInfo { id: 142, name: "Aerodactyl", base: BaseStats { hp: 80, atk: 105, def: 65, spd: 130, satk: 60, sdef: 75 } },
    SpeciesInfo { id: 143, name: "Snorlax", base: BaseStats { hp: 160, atk: 110, def: 65, spd: 30, satk: 65, sdef: 110 } },
    SpeciesInfo { id: 144, name: "Articuno", base: BaseStats { hp: 90, atk: 85, def: 100, spd: 85, satk: 95, sdef: 125 } },
    SpeciesInfo { id: 145, name: "Zapdos", base: BaseStats { hp: 90, atk: 90, def: 85, spd: 100, satk: 125, sdef: 90 } },
    SpeciesInfo { id: 146, name: "Moltres", base: BaseStats { hp: 90, atk: 100, def: 90, spd: 90, satk: 125, sdef: 85 } },
    SpeciesInfo { id: 147, name: "Dratini", base: BaseStats { hp: 41, atk: 64, def: 45, spd: 50, satk: 50, sdef: 50 } },
    SpeciesInfo { id: 148, name: "Dragonair", base: BaseStats { hp: 61, atk: 84, def: 65, spd: 70, satk: 70, sdef: 70 } },
    SpeciesInfo { id: 149, name: "Dragonite", base: BaseStats { hp: 91, atk: 134, def: 95, spd: 80, satk: 100, sdef: 100 } },
    SpeciesInfo { id: 150, name: "Mewtwo", base: BaseStats { hp: 106, atk: 110, def: 90, spd: 130, satk: 154, sdef: 90 } },
    SpeciesInfo { id: 151, name: "Mew", base: BaseStats { hp: 100, atk: 100, def: 100, spd: 100, satk: 100, sdef: 100 } },
];
