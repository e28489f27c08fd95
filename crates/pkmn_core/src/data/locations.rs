/// Indexed by met location id.
#[rustfmt::skip]
pub static LOCATION_NAMES: [&str; 213] = [
    "Littleroot Town", // 0
    "Oldale Town", // 1
    "Dewford Town", // 2
    "Lavaridge Town", // 3
    "Fallarbor Town", // 4
    "Verdanturf Town", // 5
    "Pacifidlog Town", // 6
    "Petalburg City", // 7
    "Slateport City", // 8
    "Mauville City", // 9
    "Rustboro City", // 10
    "Fortree City", // 11
    "Lilycove City", // 12
    "Mossdeep City", // 13
    "Sootopolis City", // 14
    "Ever Grande City", // 15
    "Route 101", // 16
    "Route 102", // 17
    "Route 103", // 18
    "Route 104", // 19
    "Route 105", // 20
    "Route 106", // 21
    "Route 107", // 22
    "Route 108", // 23
    "Route 109", // 24
    "Route 110", // 25
    "Route 111", // 26
    "Route 112", // 27
    "Route 113", // 28
    "Route 114", // 29
    "Route 115", // 30
    "Route 116", // 31
    "Route 117", // 32
    "Route 118", // 33
    "Route 119", // 34
    "Route 120", // 35
    "Route 121", // 36
    "Route 122", // 37
    "Route 123", // 38
    "Route 124", // 39
    "Route 125", // 40
    "Route 126", // 41
    "Route 127", // 42
    "Route 128", // 43
    "Route 129", // 44
    "Route 130", // 45
    "Route 131", // 46
    "Route 132", // 47
    "Route 133", // 48
    "Route 134", // 49
    "Underwater", // 50
    "Underwater", // 51
    "Underwater", // 52
    "Underwater", // 53
    "Underwater", // 54
    "Granite Cave", // 55
    "Mt. Chimney", // 56
    "Safari Zone", // 57
    "Battle Tower/Battle Frontier", // 58
    "Petalburg Woods", // 59
    "Rusturf Tunnel", // 60
    "Abandoned Ship", // 61
    "New Mauville", // 62
    "Meteor Falls", // 63
    "Meteor Falls", // 64
    "Mt. Pyre", // 65
    "Hideout", // 66
    "Shoal Cave", // 67
    "Seafloor Cavern", // 68
    "Underwater", // 69
    "Victory Road", // 70
    "Mirage Island", // 71
    "Cave of Origin", // 72
    "Southern Island", // 73
    "Fiery Path", // 74
    "Fiery Path", // 75
    "Jagged Pass", // 76
    "Jagged Pass", // 77
    "Sealed Chamber", // 78
    "Underwater", // 79
    "Scorched Slab", // 80
    "Island Cave", // 81
    "Desert Ruins", // 82
    "Ancient Tomb", // 83
    "Inside of Truck", // 84
    "Sky Pillar", // 85
    "Secret Base", // 86
    "Ferry", // 87
    "Pallet Town", // 88
    "Viridian City", // 89
    "Pewter City", // 90
    "Cerulean City", // 91
    "Lavender Town", // 92
    "Vermilion City", // 93
    "Celadon City", // 94
    "Fuchsia City", // 95
    "Cinnabar Island", // 96
    "Indigo Plateau", // 97
    "Saffron City", // 98
    "Route 4", // 99
    "Route 10", // 100
    "Route 1", // 101
    "Route 2", // 102
    "Route 3", // 103
    "Route 4", // 104
    "Route 5", // 105
    "Route 6", // 106
    "Route 7", // 107
    "Route 8", // 108
    "Route 9", // 109
    "Route 10", // 110
    "Route 11", // 111
    "Route 12", // 112
    "Route 13", // 113
    "Route 14", // 114
    "Route 15", // 115
    "Route 16", // 116
    "Route 17", // 117
    "Route 18", // 118
    "Route 19", // 119
    "Route 20", // 120
    "Route 21", // 121
    "Route 22", // 122
    "Route 23", // 123
    "Route 24", // 124
    "Route 25", // 125
    "Viridian Forest", // 126
    "Mt. Moon", // 127
    "S.S. Anne", // 128
    "Underground Path", // 129
    "Underground Path", // 130
    "Diglett’s Cave", // 131
    "Victory Road", // 132
    "Rocket Hideout", // 133
    "Silph Co.", // 134
    "Pokémon Mansion", // 135
    "Safari Zone", // 136
    "Pokémon League", // 137
    "Rock Tunnel", // 138
    "Seafoam Islands", // 139
    "Pokémon Tower", // 140
    "Cerulean Cave", // 141
    "Power Plant", // 142
    "One Island", // 143
    "Two Island", // 144
    "Three Island", // 145
    "Four Island", // 146
    "Five Island", // 147
    "Seven Island", // 148
    "Six Island", // 149
    "Kindle Road", // 150
    "Treasure Beach", // 151
    "Cape Brink", // 152
    "Bond Bridge", // 153
    "Three Isle Port", // 154
    "Sevii Isle 6", // 155
    "Sevii Isle 7", // 156
    "Sevii Isle 8", // 157
    "Sevii Isle 9", // 158
    "Resort Gorgeous", // 159
    "Water Labyrinth", // 160
    "Five Isle Meadow", // 161
    "Memorial Pillar", // 162
    "Outcast Island", // 163
    "Green Path", // 164
    "Water Path", // 165
    "Ruin Valley", // 166
    "Trainer Tower", // 167
    "Canyon Entrance", // 168
    "Sevault Canyon", // 169
    "Tanoby Ruins", // 170
    "Sevii Isle 22", // 171
    "Sevii Isle 23", // 172
    "Sevii Isle 24", // 173
    "Navel Rock", // 174
    "Mt. Ember", // 175
    "Berry Forest", // 176
    "Icefall Cave", // 177
    "Rocket Warehouse", // 178
    "Trainer Tower", // 179
    "Dotted Hole", // 180
    "Lost Cave", // 181
    "Pattern Bush", // 182
    "Altering Cave", // 183
    "Tanoby Chambers", // 184
    "Three Isle Path", // 185
    "Tanoby Key", // 186
    "Birth Island", // 187
    "Monean Chamber", // 188
    "Liptoo Chamber", // 189
    "Weepth Chamber", // 190
    "Dilford Chamber", // 191
    "Scufib Chamber", // 192
    "Rixy Chamber", // 193
    "Viapois Chamber", // 194
    "Ember Spa", // 195
    "Celadon Dept./Special Area", // 196
    "Aqua Hideout", // 197
    "Magma Hideout", // 198
    "Mirage Tower", // 199
    "Birth Island", // 200
    "Faraway Island", // 201
    "Artisan Cave", // 202
    "Marine Cave", // 203
    "Underwater", // 204
    "Terra Cave", // 205
    "Underwater", // 206
    "Underwater", // 207
    "Underwater", // 208
    "Desert Underpass", // 209
    "Altering Cave", // 210
    "Navel Rock", // 211
    "Trainer Hill", // 212
];
