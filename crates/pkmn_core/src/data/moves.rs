use super::MoveInfo;

#[rustfmt::skip]
pub static MOVES: [MoveInfo; 354] = [
    MoveInfo { id: 1, name: "Pound", pp: 35 },
    MoveInfo { id: 2, name: "Karate Chop", pp: 25 },
    MoveInfo { id: 3, name: "Double Slap", pp: 10 },
    MoveInfo { id: 4, name: "Comet Punch", pp: 15 },
    MoveInfo { id: 5, name: "Mega Punch", pp: 20 },
    MoveInfo { id: 6, name: "Pay Day", pp: 20 },
    MoveInfo { id: 7, name: "Fire Punch", pp: 15 },
    MoveInfo { id: 8, name: "Ice Punch", pp: 15 },
    MoveInfo { id: 9, name: "Thunder Punch", pp: 15 },
    MoveInfo { id: 10, name: "Scratch", pp: 35 },
    MoveInfo { id: 11, name: "Vise Grip", pp: 30 },
    MoveInfo { id: 12, name: "Guillotine", pp: 5 },
    MoveInfo { id: 13, name: "Razor Wind", pp: 10 },
    MoveInfo { id: 14, name: "Swords Dance", pp: 20 },
    MoveInfo { id: 15, name: "Cut", pp: 30 },
    MoveInfo { id: 16, name: "Gust", pp: 35 },
    MoveInfo { id: 17, name: "Wing Attack", pp: 35 },
    MoveInfo { id: 18, name: "Whirlwind", pp: 20 },
    MoveInfo { id: 19, name: "Fly", pp: 15 },
    MoveInfo { id: 20, name: "Bind", pp: 20 },
    MoveInfo { id: 21, name: "Slam", pp: 20 },
    MoveInfo { id: 22, name: "Vine Whip", pp: 25 },
    MoveInfo { id: 23, name: "Stomp", pp: 20 },
    MoveInfo { id: 24, name: "Double Kick", pp: 30 },
    MoveInfo { id: 25, name: "Mega Kick", pp: 5 },
    MoveInfo { id: 26, name: "Jump Kick", pp: 10 },
    MoveInfo { id: 27, name: "Rolling Kick", pp: 15 },
    MoveInfo { id: 28, name: "Sand Attack", pp: 15 },
    MoveInfo { id: 29, name: "Headbutt", pp: 15 },
    MoveInfo { id: 30, name: "Horn Attack", pp: 25 },
    MoveInfo { id: 31, name: "Fury Attack", pp: 20 },
    MoveInfo { id: 32, name: "Horn Drill", pp: 5 },
    MoveInfo { id: 33, name: "Tackle", pp: 35 },
    MoveInfo { id: 34, name: "Body Slam", pp: 15 },
    MoveInfo { id: 35, name: "Wrap", pp: 20 },
    MoveInfo { id: 36, name: "Take Down", pp: 20 },
    MoveInfo { id: 37, name: "Thrash", pp: 20 },
    MoveInfo { id: 38, name: "Double-Edge", pp: 15 },
    MoveInfo { id: 39, name: "Tail Whip", pp: 30 },
    MoveInfo { id: 40, name: "Poison Sting", pp: 35 },
    MoveInfo { id: 41, name: "Twineedle", pp: 20 },
    MoveInfo { id: 42, name: "Pin Missile", pp: 20 },
    MoveInfo { id: 43, name: "Leer", pp: 30 },
    MoveInfo { id: 44, name: "Bite", pp: 25 },
    MoveInfo { id: 45, name: "Growl", pp: 40 },
    MoveInfo { id: 46, name: "Roar", pp: 20 },
    MoveInfo { id: 47, name: "Sing", pp: 15 },
    MoveInfo { id: 48, name: "Supersonic", pp: 20 },
    MoveInfo { id: 49, name: "Sonic Boom", pp: 20 },
    MoveInfo { id: 50, name: "Disable", pp: 20 },
    MoveInfo { id: 51, name: "Acid", pp: 30 },
    MoveInfo { id: 52, name: "Ember", pp: 25 },
    MoveInfo { id: 53, name: "Flamethrower", pp: 15 },
    MoveInfo { id: 54, name: "Mist", pp: 30 },
    MoveInfo { id: 55, name: "Water Gun", pp: 25 },
    MoveInfo { id: 56, name: "Hydro Pump", pp: 5 },
    MoveInfo { id: 57, name: "Surf", pp: 15 },
    MoveInfo { id: 58, name: "Ice Beam", pp: 10 },
    MoveInfo { id: 59, name: "Blizzard", pp: 5 },
    MoveInfo { id: 60, name: "Psybeam", pp: 20 },
    MoveInfo { id: 61, name: "Bubble Beam", pp: 20 },
    MoveInfo { id: 62, name: "Aurora Beam", pp: 20 },
    MoveInfo { id: 63, name: "Hyper Beam", pp: 5 },
    MoveInfo { id: 64, name: "Peck", pp: 35 },
    MoveInfo { id: 65, name: "Drill Peck", pp: 20 },
    MoveInfo { id: 66, name: "Submission", pp: 20 },
    MoveInfo { id: 67, name: "Low Kick", pp: 20 },
    MoveInfo { id: 68, name: "Counter", pp: 20 },
    MoveInfo { id: 69, name: "Seismic Toss", pp: 20 },
    MoveInfo { id: 70, name: "Strength", pp: 15 },
    MoveInfo { id: 71, name: "Absorb", pp: 25 },
    MoveInfo { id: 72, name: "Mega Drain", pp: 15 },
    MoveInfo { id: 73, name: "Leech Seed", pp: 10 },
    MoveInfo { id: 74, name: "Growth", pp: 20 },
    MoveInfo { id: 75, name: "Razor Leaf", pp: 25 },
    MoveInfo { id: 76, name: "Solar Beam", pp: 10 },
    MoveInfo { id: 77, name: "Poison Powder", pp: 35 },
    MoveInfo { id: 78, name: "Stun Spore", pp: 30 },
    MoveInfo { id: 79, name: "Sleep Powder", pp: 15 },
    MoveInfo { id: 80, name: "Petal Dance", pp: 10 },
    MoveInfo { id: 81, name: "String Shot", pp: 40 },
    MoveInfo { id: 82, name: "Dragon Rage", pp: 10 },
    MoveInfo { id: 83, name: "Fire Spin", pp: 15 },
    MoveInfo { id: 84, name: "Thunder Shock", pp: 30 },
    MoveInfo { id: 85, name: "Thunderbolt", pp: 15 },
    MoveInfo { id: 86, name: "Thunder Wave", pp: 20 },
    MoveInfo { id: 87, name: "Thunder", pp: 10 },
    MoveInfo { id: 88, name: "Rock Throw", pp: 15 },
    MoveInfo { id: 89, name: "Earthquake", pp: 10 },
    MoveInfo { id: 90, name: "Fissure", pp: 5 },
    MoveInfo { id: 91, name: "Dig", pp: 10 },
    MoveInfo { id: 92, name: "Toxic", pp: 10 },
    MoveInfo { id: 93, name: "Confusion", pp: 25 },
    MoveInfo { id: 94, name: "Psychic", pp: 10 },
    MoveInfo { id: 95, name: "Hypnosis", pp: 20 },
    MoveInfo { id: 96, name: "Meditate", pp: 40 },
    MoveInfo { id: 97, name: "Agility", pp: 30 },
    MoveInfo { id: 98, name: "Quick Attack", pp: 30 },
    MoveInfo { id: 99, name: "Rage", pp: 20 },
    MoveInfo { id: 100, name: "Teleport", pp: 20 },
    MoveInfo { id: 101, name: "Night Shade", pp: 15 },
    MoveInfo { id: 102, name: "Mimic", pp: 10 },
    MoveInfo { id: 103, name: "Screech", pp: 40 },
    MoveInfo { id: 104, name: "Double Team", pp: 15 },
    MoveInfo { id: 105, name: "Recover", pp: 5 },
    MoveInfo { id: 106, name: "Harden", pp: 30 },
    MoveInfo { id: 107, name: "Minimize", pp: 10 },
    MoveInfo { id: 108, name: "Smokescreen", pp: 20 },
    MoveInfo { id: 109, name: "Confuse Ray", pp: 10 },
    MoveInfo { id: 110, name: "Withdraw", pp: 40 },
    MoveInfo { id: 111, name: "Defense Curl", pp: 40 },
    MoveInfo { id: 112, name: "Barrier", pp: 20 },
    MoveInfo { id: 113, name: "Light Screen", pp: 30 },
    MoveInfo { id: 114, name: "Haze", pp: 30 },
    MoveInfo { id: 115, name: "Reflect", pp: 20 },
    MoveInfo { id: 116, name: "Focus Energy", pp: 30 },
    MoveInfo { id: 117, name: "Bide", pp: 10 },
    MoveInfo { id: 118, name: "Metronome", pp: 10 },
    MoveInfo { id: 119, name: "Mirror Move", pp: 20 },
    MoveInfo { id: 120, name: "Self-Destruct", pp: 5 },
    MoveInfo { id: 121, name: "Egg Bomb", pp: 10 },
    MoveInfo { id: 122, name: "Lick", pp: 30 },
    MoveInfo { id: 123, name: "Smog", pp: 20 },
    MoveInfo { id: 124, name: "Sludge", pp: 20 },
    MoveInfo { id: 125, name: "Bone Club", pp: 20 },
    MoveInfo { id: 126, name: "Fire Blast", pp: 5 },
    MoveInfo { id: 127, name: "Waterfall", pp: 15 },
    MoveInfo { id: 128, name: "Clamp", pp: 15 },
    MoveInfo { id: 129, name: "Swift", pp: 20 },
    MoveInfo { id: 130, name: "Skull Bash", pp: 10 },
    MoveInfo { id: 131, name: "Spike Cannon", pp: 15 },
    MoveInfo { id: 132, name: "Constrict", pp: 35 },
    MoveInfo { id: 133, name: "Amnesia", pp: 20 },
    MoveInfo { id: 134, name: "Kinesis", pp: 15 },
    MoveInfo { id: 135, name: "Soft-Boiled", pp: 5 },
    MoveInfo { id: 136, name: "High Jump Kick", pp: 10 },
    MoveInfo { id: 137, name: "Glare", pp: 30 },
    MoveInfo { id: 138, name: "Dream Eater", pp: 15 },
    MoveInfo { id: 139, name: "Poison Gas", pp: 40 },
    MoveInfo { id: 140, name: "Barrage", pp: 20 },
    MoveInfo { id: 141, name: "Leech Life", pp: 15 },
    MoveInfo { id: 142, name: "Lovely Kiss", pp: 10 },
    MoveInfo { id: 143, name: "Sky Attack", pp: 5 },
    MoveInfo { id: 144, name: "Transform", pp: 10 },
    MoveInfo { id: 145, name: "Bubble", pp: 30 },
    MoveInfo { id: 146, name: "Dizzy Punch", pp: 10 },
    MoveInfo { id: 147, name: "Spore", pp: 15 },
    MoveInfo { id: 148, name: "Flash", pp: 20 },
    MoveInfo { id: 149, name: "Psywave", pp: 15 },
    MoveInfo { id: 150, name: "Splash", pp: 40 },
    MoveInfo { id: 151, name: "Acid Armor", pp: 20 },
    MoveInfo { id: 152, name: "Crabhammer", pp: 10 },
    MoveInfo { id: 153, name: "Explosion", pp: 5 },
    MoveInfo { id: 154, name: "Fury Swipes", pp: 15 },
    MoveInfo { id: 155, name: "Bonemerang", pp: 10 },
    MoveInfo { id: 156, name: "Rest", pp: 10 },
    MoveInfo { id: 157, name: "Rock Slide", pp: 10 },
    MoveInfo { id: 158, name: "Hyper Fang", pp: 15 },
    MoveInfo { id: 159, name: "Sharpen", pp: 30 },
    MoveInfo { id: 160, name: "Conversion", pp: 30 },
    MoveInfo { id: 161, name: "Tri Attack", pp: 10 },
    MoveInfo { id: 162, name: "Super Fang", pp: 10 },
    MoveInfo { id: 163, name: "Slash", pp: 20 },
    MoveInfo { id: 164, name: "Substitute", pp: 10 },
    MoveInfo { id: 165, name: "Struggle", pp: 1 },
    MoveInfo { id: 166, name: "Sketch", pp: 1 },
    MoveInfo { id: 167, name: "Triple Kick", pp: 10 },
    MoveInfo { id: 168, name: "Thief", pp: 25 },
    MoveInfo { id: 169, name: "Spider Web", pp: 10 },
    MoveInfo { id: 170, name: "Mind Reader", pp: 5 },
    MoveInfo { id: 171, name: "Nightmare", pp: 15 },
    MoveInfo { id: 172, name: "Flame Wheel", pp: 25 },
    MoveInfo { id: 173, name: "Snore", pp: 15 },
    MoveInfo { id: 174, name: "Curse", pp: 10 },
    MoveInfo { id: 175, name: "Flail", pp: 15 },
    MoveInfo { id: 176, name: "Conversion 2", pp: 30 },
    MoveInfo { id: 177, name: "Aeroblast", pp: 5 },
    MoveInfo { id: 178, name: "Cotton Spore", pp: 40 },
    MoveInfo { id: 179, name: "Reversal", pp: 15 },
    MoveInfo { id: 180, name: "Spite", pp: 10 },
    MoveInfo { id: 181, name: "Powder Snow", pp: 25 },
    MoveInfo { id: 182, name: "Protect", pp: 10 },
    MoveInfo { id: 183, name: "Mach Punch", pp: 30 },
    MoveInfo { id: 184, name: "Scary Face", pp: 10 },
    MoveInfo { id: 185, name: "Feint Attack", pp: 20 },
    MoveInfo { id: 186, name: "Sweet Kiss", pp: 10 },
    MoveInfo { id: 187, name: "Belly Drum", pp: 10 },
    MoveInfo { id: 188, name: "Sludge Bomb", pp: 10 },
    MoveInfo { id: 189, name: "Mud-Slap", pp: 10 },
    MoveInfo { id: 190, name: "Octazooka", pp: 10 },
    MoveInfo { id: 191, name: "Spikes", pp: 20 },
    MoveInfo { id: 192, name: "Zap Cannon", pp: 5 },
    MoveInfo { id: 193, name: "Foresight", pp: 40 },
    MoveInfo { id: 194, name: "Destiny Bond", pp: 5 },
    MoveInfo { id: 195, name: "Perish Song", pp: 5 },
    MoveInfo { id: 196, name: "Icy Wind", pp: 15 },
    MoveInfo { id: 197, name: "Detect", pp: 5 },
    MoveInfo { id: 198, name: "Bone Rush", pp: 10 },
    MoveInfo { id: 199, name: "Lock-On", pp: 5 },
    MoveInfo { id: 200, name: "Outrage", pp: 10 },
    MoveInfo { id: 201, name: "Sandstorm", pp: 10 },
    MoveInfo { id: 202, name: "Giga Drain", pp: 10 },
    MoveInfo { id: 203, name: "Endure", pp: 10 },
    MoveInfo { id: 204, name: "Charm", pp: 20 },
    MoveInfo { id: 205, name: "Rollout", pp: 20 },
    MoveInfo { id: 206, name: "False Swipe", pp: 40 },
    MoveInfo { id: 207, name: "Swagger", pp: 15 },
    MoveInfo { id: 208, name: "Milk Drink", pp: 5 },
    MoveInfo { id: 209, name: "Spark", pp: 20 },
    MoveInfo { id: 210, name: "Fury Cutter", pp: 20 },
    MoveInfo { id: 211, name: "Steel Wing", pp: 25 },
    MoveInfo { id: 212, name: "Mean Look", pp: 5 },
    MoveInfo { id: 213, name: "Attract", pp: 15 },
    MoveInfo { id: 214, name: "Sleep Talk", pp: 10 },
    MoveInfo { id: 215, name: "Heal Bell", pp: 5 },
    MoveInfo { id: 216, name: "Return", pp: 20 },
    MoveInfo { id: 217, name: "Present", pp: 15 },
    MoveInfo { id: 218, name: "Frustration", pp: 20 },
    MoveInfo { id: 219, name: "Safeguard", pp: 25 },
    MoveInfo { id: 220, name: "Pain Split", pp: 20 },
    MoveInfo { id: 221, name: "Sacred Fire", pp: 5 },
    MoveInfo { id: 222, name: "Magnitude", pp: 30 },
    MoveInfo { id: 223, name: "Dynamic Punch", pp: 5 },
    MoveInfo { id: 224, name: "Megahorn", pp: 10 },
    MoveInfo { id: 225, name: "Dragon Breath", pp: 20 },
    MoveInfo { id: 226, name: "Baton Pass", pp: 40 },
    MoveInfo { id: 227, name: "Encore", pp: 5 },
    MoveInfo { id: 228, name: "Pursuit", pp: 20 },
    MoveInfo { id: 229, name: "Rapid Spin", pp: 40 },
    MoveInfo { id: 230, name: "Sweet Scent", pp: 20 },
    MoveInfo { id: 231, name: "Iron Tail", pp: 15 },
    MoveInfo { id: 232, name: "Metal Claw", pp: 35 },
    MoveInfo { id: 233, name: "Vital Throw", pp: 10 },
    MoveInfo { id: 234, name: "Morning Sun", pp: 5 },
    MoveInfo { id: 235, name: "Synthesis", pp: 5 },
    MoveInfo { id: 236, name: "Moonlight", pp: 5 },
    MoveInfo { id: 237, name: "Hidden Power", pp: 15 },
    MoveInfo { id: 238, name: "Cross Chop", pp: 5 },
    MoveInfo { id: 239, name: "Twister", pp: 20 },
    MoveInfo { id: 240, name: "Rain Dance", pp: 5 },
    MoveInfo { id: 241, name: "Sunny Day", pp: 5 },
    MoveInfo { id: 242, name: "Crunch", pp: 15 },
    MoveInfo { id: 243, name: "Mirror Coat", pp: 20 },
    MoveInfo { id: 244, name: "Psych Up", pp: 10 },
    MoveInfo { id: 245, name: "Extreme Speed", pp: 5 },
    MoveInfo { id: 246, name: "Ancient Power", pp: 5 },
    MoveInfo { id: 247, name: "Shadow Ball", pp: 15 },
    MoveInfo { id: 248, name: "Future Sight", pp: 10 },
    MoveInfo { id: 249, name: "Rock Smash", pp: 15 },
    MoveInfo { id: 250, name: "Whirlpool", pp: 15 },
    MoveInfo { id: 251, name: "Beat Up", pp: 10 },
    MoveInfo { id: 252, name: "Fake Out", pp: 10 },
    MoveInfo { id: 253, name: "Uproar", pp: 10 },
    MoveInfo { id: 254, name: "Stockpile", pp: 20 },
    MoveInfo { id: 255, name: "Spit Up", pp: 10 },
    MoveInfo { id: 256, name: "Swallow", pp: 10 },
    MoveInfo { id: 257, name: "Heat Wave", pp: 10 },
    MoveInfo { id: 258, name: "Hail", pp: 10 },
    MoveInfo { id: 259, name: "Torment", pp: 15 },
    MoveInfo { id: 260, name: "Flatter", pp: 15 },
    MoveInfo { id: 261, name: "Will-O-Wisp", pp: 15 },
    MoveInfo { id: 262, name: "Memento", pp: 10 },
    MoveInfo { id: 263, name: "Facade", pp: 20 },
    MoveInfo { id: 264, name: "Focus Punch", pp: 20 },
    MoveInfo { id: 265, name: "Smelling Salts", pp: 10 },
    MoveInfo { id: 266, name: "Follow Me", pp: 20 },
    MoveInfo { id: 267, name: "Nature Power", pp: 20 },
    MoveInfo { id: 268, name: "Charge", pp: 20 },
    MoveInfo { id: 269, name: "Taunt", pp: 20 },
    MoveInfo { id: 270, name: "Helping Hand", pp: 20 },
    MoveInfo { id: 271, name: "Trick", pp: 10 },
    MoveInfo { id: 272, name: "Role Play", pp: 10 },
    MoveInfo { id: 273, name: "Wish", pp: 10 },
    MoveInfo { id: 274, name: "Assist", pp: 20 },
    MoveInfo { id: 275, name: "Ingrain", pp: 20 },
    MoveInfo { id: 276, name: "Superpower", pp: 5 },
    MoveInfo { id: 277, name: "Magic Coat", pp: 15 },
    MoveInfo { id: 278, name: "Recycle", pp: 10 },
    MoveInfo { id: 279, name: "Revenge", pp: 10 },
    MoveInfo { id: 280, name: "Brick Break", pp: 15 },
    MoveInfo { id: 281, name: "Yawn", pp: 10 },
    MoveInfo { id: 282, name: "Knock Off", pp: 20 },
    MoveInfo { id: 283, name: "Endeavor", pp: 5 },
    MoveInfo { id: 284, name: "Eruption", pp: 5 },
    MoveInfo { id: 285, name: "Skill Swap", pp: 10 },
    MoveInfo { id: 286, name: "Imprison", pp: 10 },
    MoveInfo { id: 287, name: "Refresh", pp: 20 },
    MoveInfo { id: 288, name: "Grudge", pp: 5 },
    MoveInfo { id: 289, name: "Snatch", pp: 10 },
    MoveInfo { id: 290, name: "Secret Power", pp: 20 },
    MoveInfo { id: 291, name: "Dive", pp: 10 },
    MoveInfo { id: 292, name: "Arm Thrust", pp: 20 },
    MoveInfo { id: 293, name: "Camouflage", pp: 20 },
    MoveInfo { id: 294, name: "Tail Glow", pp: 20 },
    MoveInfo { id: 295, name: "Luster Purge", pp: 5 },
    MoveInfo { id: 296, name: "Mist Ball", pp: 5 },
    MoveInfo { id: 297, name: "Feather Dance", pp: 15 },
    MoveInfo { id: 298, name: "Teeter Dance", pp: 20 },
    MoveInfo { id: 299, name: "Blaze Kick", pp: 10 },
    MoveInfo { id: 300, name: "Mud Sport", pp: 15 },
    MoveInfo { id: 301, name: "Ice Ball", pp: 20 },
    MoveInfo { id: 302, name: "Needle Arm", pp: 15 },
    MoveInfo { id: 303, name: "Slack Off", pp: 5 },
    MoveInfo { id: 304, name: "Hyper Voice", pp: 10 },
    MoveInfo { id: 305, name: "Poison Fang", pp: 15 },
    MoveInfo { id: 306, name: "Crush Claw", pp: 10 },
    MoveInfo { id: 307, name: "Blast Burn", pp: 5 },
    MoveInfo { id: 308, name: "Hydro Cannon", pp: 5 },
    MoveInfo { id: 309, name: "Meteor Mash", pp: 10 },
    MoveInfo { id: 310, name: "Astonish", pp: 15 },
    MoveInfo { id: 311, name: "Weather Ball", pp: 10 },
    MoveInfo { id: 312, name: "Aromatherapy", pp: 5 },
    MoveInfo { id: 313, name: "Fake Tears", pp: 20 },
    MoveInfo { id: 314, name: "Air Cutter", pp: 25 },
    MoveInfo { id: 315, name: "Overheat", pp: 5 },
    MoveInfo { id: 316, name: "Odor Sleuth", pp: 40 },
    MoveInfo { id: 317, name: "Rock Tomb", pp: 15 },
    MoveInfo { id: 318, name: "Silver Wind", pp: 5 },
    MoveInfo { id: 319, name: "Metal Sound", pp: 40 },
    MoveInfo { id: 320, name: "Grass Whistle", pp: 15 },
    MoveInfo { id: 321, name: "Tickle", pp: 20 },
    MoveInfo { id: 322, name: "Cosmic Power", pp: 20 },
    MoveInfo { id: 323, name: "Water Spout", pp: 5 },
    MoveInfo { id: 324, name: "Signal Beam", pp: 15 },
    MoveInfo { id: 325, name: "Shadow Punch", pp: 20 },
    MoveInfo { id: 326, name: "Extrasensory", pp: 20 },
    MoveInfo { id: 327, name: "Sky Uppercut", pp: 15 },
    MoveInfo { id: 328, name: "Sand Tomb", pp: 15 },
    MoveInfo { id: 329, name: "Sheer Cold", pp: 5 },
    MoveInfo { id: 330, name: "Muddy Water", pp: 10 },
    MoveInfo { id: 331, name: "Bullet Seed", pp: 30 },
    MoveInfo { id: 332, name: "Aerial Ace", pp: 20 },
    MoveInfo { id: 333, name: "Icicle Spear", pp: 30 },
    MoveInfo { id: 334, name: "Iron Defense", pp: 15 },
    MoveInfo { id: 335, name: "Block", pp: 5 },
    MoveInfo { id: 336, name: "Howl", pp: 40 },
    MoveInfo { id: 337, name: "Dragon Claw", pp: 15 },
    MoveInfo { id: 338, name: "Frenzy Plant", pp: 5 },
    MoveInfo { id: 339, name: "Bulk Up", pp: 20 },
    MoveInfo { id: 340, name: "Bounce", pp: 5 },
    MoveInfo { id: 341, name: "Mud Shot", pp: 15 },
    MoveInfo { id: 342, name: "Poison Tail", pp: 25 },
    MoveInfo { id: 343, name: "Covet", pp: 25 },
    MoveInfo { id: 344, name: "Volt Tackle", pp: 15 },
    MoveInfo { id: 345, name: "Magical Leaf", pp: 20 },
    MoveInfo { id: 346, name: "Water Sport", pp: 15 },
    MoveInfo { id: 347, name: "Calm Mind", pp: 20 },
    MoveInfo { id: 348, name: "Leaf Blade", pp: 15 },
    MoveInfo { id: 349, name: "Dragon Dance", pp: 20 },
    MoveInfo { id: 350, name: "Rock Blast", pp: 10 },
    MoveInfo { id: 351, name: "Shock Wave", pp: 20 },
    MoveInfo { id: 352, name: "Water Pulse", pp: 20 },
    MoveInfo { id: 353, name: "Doom Desire", pp: 5 },
    MoveInfo { id: 354, name: "Psycho Boost", pp: 5 },
];
